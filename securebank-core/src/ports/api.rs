//! Bank API port
//!
//! Defines the interface to the remote SecureBank REST API. One method per
//! endpoint; authorized calls take the bearer token explicitly so no
//! ambient session state leaks into the transport layer.

use crate::domain::result::Result;
use crate::domain::{
    AccountDetails, Credentials, LoginResponse, PaymentRecord, PaymentRequest, RegistrationRequest,
};

/// Remote bank API
///
/// Implementations make exactly one request attempt per call - no retry,
/// no backoff. Failures carry the server-provided message when one exists.
pub trait BankApi: Send + Sync {
    /// `POST /auth/login`. Fails with `Error::Auth` on non-2xx.
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// `POST /auth/register`. Fails with `Error::Auth` on non-2xx.
    fn register(&self, request: &RegistrationRequest) -> Result<()>;

    /// `GET /accounts/details`, bearer-authorized.
    fn account_details(&self, token: &str) -> Result<AccountDetails>;

    /// `GET /payments`, bearer-authorized. Returns the server's ordering.
    fn payments(&self, token: &str) -> Result<Vec<PaymentRecord>>;

    /// `POST /payments`, bearer-authorized. Fails with `Error::Payment`
    /// on non-2xx.
    fn submit_payment(&self, request: &PaymentRequest, token: &str) -> Result<PaymentRecord>;
}
