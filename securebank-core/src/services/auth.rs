//! Auth service - login and registration flows

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{LoginDraft, RegistrationDraft};
use crate::ports::BankApi;
use crate::session::SessionStore;

/// Login and registration orchestration
pub struct AuthService {
    api: Arc<dyn BankApi>,
}

impl AuthService {
    pub fn new(api: Arc<dyn BankApi>) -> Self {
        Self { api }
    }

    /// Validate the draft, authenticate, and store the returned token.
    ///
    /// Validation failures never reach the network. The token write happens
    /// before this returns, so a following protected-route resolution sees
    /// the new session.
    pub fn login(&self, draft: &LoginDraft, session: &mut SessionStore) -> Result<()> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        let response = self.api.login(&draft.credentials())?;
        session.set_token(response.token)?;
        Ok(())
    }

    /// Validate the draft and register. The confirmation password is
    /// checked locally and stripped from the request.
    pub fn register(&self, draft: &RegistrationDraft) -> Result<()> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        self.api.register(&draft.request())
    }

    /// Destroy the session.
    pub fn logout(&self, session: &mut SessionStore) -> Result<()> {
        session.clear_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    use crate::domain::result::Error;
    use crate::domain::{
        AccountDetails, Credentials, LoginResponse, PaymentRecord, PaymentRequest,
        RegistrationRequest,
    };

    #[derive(Default)]
    struct FakeApi {
        login_calls: Mutex<u32>,
        register_calls: Mutex<u32>,
        reject_login: bool,
    }

    impl BankApi for FakeApi {
        fn login(&self, _credentials: &Credentials) -> Result<LoginResponse> {
            *self.login_calls.lock().unwrap() += 1;
            if self.reject_login {
                return Err(Error::auth("Invalid account number or password"));
            }
            Ok(LoginResponse {
                token: "tok".to_string(),
            })
        }

        fn register(&self, _request: &RegistrationRequest) -> Result<()> {
            *self.register_calls.lock().unwrap() += 1;
            Ok(())
        }

        fn account_details(&self, _token: &str) -> Result<AccountDetails> {
            unimplemented!()
        }

        fn payments(&self, _token: &str) -> Result<Vec<PaymentRecord>> {
            unimplemented!()
        }

        fn submit_payment(&self, _request: &PaymentRequest, _token: &str) -> Result<PaymentRecord> {
            unimplemented!()
        }
    }

    fn valid_login() -> LoginDraft {
        LoginDraft {
            account_number: "12345678".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_invalid_login_draft_makes_no_network_call() {
        let dir = tempdir().unwrap();
        let api = Arc::new(FakeApi::default());
        let service = AuthService::new(api.clone());
        let mut session = SessionStore::load(dir.path());

        let draft = LoginDraft::default();
        let result = service.login(&draft, &mut session);

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(*api.login_calls.lock().unwrap(), 0);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_successful_login_stores_token() {
        let dir = tempdir().unwrap();
        let api = Arc::new(FakeApi::default());
        let service = AuthService::new(api);
        let mut session = SessionStore::load(dir.path());

        service.login(&valid_login(), &mut session).unwrap();
        assert_eq!(session.token(), Some("tok"));
    }

    #[test]
    fn test_rejected_login_leaves_session_empty() {
        let dir = tempdir().unwrap();
        let api = Arc::new(FakeApi {
            reject_login: true,
            ..Default::default()
        });
        let service = AuthService::new(api);
        let mut session = SessionStore::load(dir.path());

        let err = service.login(&valid_login(), &mut session).unwrap_err();
        assert_eq!(err.user_message(), "Invalid account number or password");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_invalid_registration_makes_no_network_call() {
        let api = Arc::new(FakeApi::default());
        let service = AuthService::new(api.clone());

        let draft = RegistrationDraft {
            password: "Passw0rd!".to_string(),
            confirm_password: "different".to_string(),
            ..Default::default()
        };
        assert!(service.register(&draft).is_err());
        assert_eq!(*api.register_calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_logout_clears_token() {
        let dir = tempdir().unwrap();
        let api = Arc::new(FakeApi::default());
        let service = AuthService::new(api);
        let mut session = SessionStore::load(dir.path());

        service.login(&valid_login(), &mut session).unwrap();
        service.logout(&mut session).unwrap();
        assert!(!session.is_authenticated());
    }
}
