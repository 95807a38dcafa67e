//! SecureBank Core - client logic for international payments
//!
//! This crate implements the client-side domain logic following hexagonal
//! architecture:
//!
//! - **domain**: Form drafts, wire payloads, validation rules
//! - **ports**: Trait definition for the remote bank API
//! - **services**: Form controllers (auth, payment submission, dashboard)
//! - **adapters**: Concrete HTTP implementation (reqwest)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod routes;
pub mod services;
pub mod session;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::HttpBankApi;
use config::Config;
use ports::BankApi;
use services::{AuthService, DashboardService, PaymentService};
use session::SessionStore;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    AccountDetails, Currency, FieldErrors, LoginDraft, PaymentDraft, PaymentRecord, PaymentStatus,
    Provider, RegistrationDraft,
};
pub use routes::{resolve, Resolution, Route};
pub use services::{LogEvent, LoggingService, PaymentSubmission, SubmissionState};

/// Main context for SecureBank client operations
///
/// The primary entry point: holds the configuration, the session store,
/// and the services. The session is loaded once at construction and is the
/// single source of authorization state for route resolution.
pub struct BankContext {
    pub config: Config,
    pub session: SessionStore,
    pub auth_service: AuthService,
    pub payment_service: PaymentService,
    pub dashboard_service: DashboardService,
}

impl BankContext {
    /// Create a new context rooted at the given app directory.
    pub fn new(app_dir: &Path) -> Result<Self> {
        let config = Config::load(app_dir)?;
        let api: Arc<dyn BankApi> = Arc::new(HttpBankApi::from_config(&config)?);
        Ok(Self::with_api(config, SessionStore::load(app_dir), api))
    }

    /// Wire the context against an arbitrary API implementation.
    pub fn with_api(config: Config, session: SessionStore, api: Arc<dyn BankApi>) -> Self {
        let auth_service = AuthService::new(Arc::clone(&api));
        let payment_service = PaymentService::new(Arc::clone(&api));
        let dashboard_service = DashboardService::new(api);

        Self {
            config,
            session,
            auth_service,
            payment_service,
            dashboard_service,
        }
    }

    /// Resolve a route against the current session.
    pub fn resolve(&self, route: Route) -> Resolution {
        routes::resolve(route, self.session.is_authenticated())
    }
}
