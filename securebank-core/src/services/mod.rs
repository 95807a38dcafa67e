//! Service layer - form controllers and orchestration
//!
//! Each service owns one user-facing flow: it runs validation, talks to the
//! `BankApi` port, and updates the session where needed. No failure
//! propagates past a service without being converted to a displayable
//! message.

mod auth;
mod dashboard;
pub mod logging;
mod payment;

pub use auth::AuthService;
pub use dashboard::{DashboardOverview, DashboardService, TransactionView};
pub use logging::{LogEntry, LogEvent, LoggingService};
pub use payment::{Navigation, PaymentService, PaymentSubmission, SubmissionState, REDIRECT_DELAY};
