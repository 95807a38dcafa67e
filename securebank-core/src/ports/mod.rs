//! Port definitions
//!
//! Trait seams for external dependencies. Services depend on these traits,
//! never on the concrete HTTP adapter, so tests can drive the full flow
//! against an in-memory fake.

mod api;

pub use api::BankApi;
