//! Authentication domain models
//!
//! Drafts hold in-memory form state; request structs are the exact wire
//! shapes posted to `/api/auth/*`. `confirm_password` exists only on the
//! registration draft for the local equality check and is never serialized.

use serde::{Deserialize, Serialize};

/// Login form draft. Transient, created per attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub account_number: String,
    pub password: String,
}

impl LoginDraft {
    /// Wire payload for `POST /auth/login`
    pub fn credentials(&self) -> Credentials {
        Credentials {
            account_number: self.account_number.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub account_number: String,
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Registration form draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    /// Wire payload for `POST /auth/register`, with the confirmation
    /// field stripped.
    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name.clone(),
            id_number: self.id_number.clone(),
            account_number: self.account_number.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_request_omits_confirmation() {
        let draft = RegistrationDraft {
            full_name: "Jane Doe".to_string(),
            id_number: "1234567890123".to_string(),
            account_number: "1234567890".to_string(),
            password: "Passw0rd!".to_string(),
            confirm_password: "Passw0rd!".to_string(),
        };

        let json = serde_json::to_value(draft.request()).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["idNumber"], "1234567890123");
        assert_eq!(json["accountNumber"], "1234567890");
        assert_eq!(json["password"], "Passw0rd!");
        assert!(json.get("confirmPassword").is_none());
    }

    #[test]
    fn test_credentials_serialize_camel_case() {
        let draft = LoginDraft {
            account_number: "12345678".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_value(draft.credentials()).unwrap();
        assert_eq!(json["accountNumber"], "12345678");
        assert_eq!(json["password"], "secret");
    }
}
