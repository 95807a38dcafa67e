//! Core domain entities
//!
//! Form drafts, wire payloads, and validation rules. These are pure data
//! structures with validation logic - no I/O or external dependencies.

mod auth;
mod payment;
pub mod result;
pub mod validate;

pub use auth::{Credentials, LoginDraft, LoginResponse, RegistrationDraft, RegistrationRequest};
pub use payment::{
    AccountDetails, Currency, PaymentDraft, PaymentRecord, PaymentRequest, PaymentStatus, Provider,
};
pub use validate::FieldErrors;
