//! SecureBank API client
//!
//! Handles communication with the SecureBank REST API. One blocking request
//! per call; failures are mapped to the form-level error taxonomy with the
//! server's `message` surfaced when the body carries one.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{
    AccountDetails, Credentials, LoginResponse, PaymentRecord, PaymentRequest, RegistrationRequest,
};
use crate::ports::BankApi;

const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
const PAYMENT_FALLBACK: &str = "Payment failed. Please try again.";

/// SecureBank HTTP client
#[derive(Debug)]
pub struct HttpBankApi {
    client: Client,
    base_url: String,
}

/// Error body shape the server uses for rejections
#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

impl HttpBankApi {
    /// Create a new client against the given base URL (ending in `/api`).
    ///
    /// HTTPS is required except for localhost. `accept_invalid_certs` is the
    /// development escape hatch for self-signed certificates.
    pub fn new(base_url: &str, timeout: Duration, accept_invalid_certs: bool) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|_| Error::config(format!("Invalid API base URL: {}", base_url)))?;

        let host = parsed.host_str().unwrap_or("");
        let is_local = host == "localhost" || host == "127.0.0.1";
        if parsed.scheme() != "https" && !is_local {
            return Err(Error::config("API base URL must use HTTPS"));
        }

        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| Error::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, config.timeout, config.accept_invalid_certs)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map transport errors to user-friendly messages
    fn map_request_error(error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::network("Connection timed out. Please try again.")
        } else if error.is_connect() {
            Error::network("Unable to reach SecureBank. Please check your connection.")
        } else {
            Error::network(format!("Request failed: {}", error))
        }
    }

    /// Extract the server's rejection message, falling back when the body
    /// has no structured payload.
    fn rejection_message(response: Response, fallback: &str) -> String {
        response
            .json::<ServerMessage>()
            .map(|body| body.message)
            .unwrap_or_else(|_| fallback.to_string())
    }

    fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json()
            .map_err(|e| Error::network(format!("Failed to parse server response: {}", e)))
    }
}

impl BankApi for HttpBankApi {
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .map_err(Self::map_request_error)?;

        if !response.status().is_success() {
            return Err(Error::Auth(Self::rejection_message(response, LOGIN_FALLBACK)));
        }

        Self::parse_json(response)
    }

    fn register(&self, request: &RegistrationRequest) -> Result<()> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .map_err(Self::map_request_error)?;

        if !response.status().is_success() {
            return Err(Error::Auth(Self::rejection_message(response, REGISTER_FALLBACK)));
        }

        // Success payload is ignored beyond the status.
        Ok(())
    }

    fn account_details(&self, token: &str) -> Result<AccountDetails> {
        let response = self
            .client
            .get(self.url("/accounts/details"))
            .bearer_auth(token)
            .send()
            .map_err(Self::map_request_error)?;

        if !response.status().is_success() {
            return Err(Error::Auth(Self::rejection_message(
                response,
                "Failed to load account details. Please log in again.",
            )));
        }

        Self::parse_json(response)
    }

    fn payments(&self, token: &str) -> Result<Vec<PaymentRecord>> {
        let response = self
            .client
            .get(self.url("/payments"))
            .bearer_auth(token)
            .send()
            .map_err(Self::map_request_error)?;

        if !response.status().is_success() {
            return Err(Error::Auth(Self::rejection_message(
                response,
                "Failed to load payment history. Please log in again.",
            )));
        }

        Self::parse_json(response)
    }

    fn submit_payment(&self, request: &PaymentRequest, token: &str) -> Result<PaymentRecord> {
        let response = self
            .client
            .post(self.url("/payments"))
            .bearer_auth(token)
            .json(request)
            .send()
            .map_err(Self::map_request_error)?;

        if !response.status().is_success() {
            return Err(Error::Payment(Self::rejection_message(response, PAYMENT_FALLBACK)));
        }

        Self::parse_json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::domain::{Currency, Provider};

    #[test]
    fn test_accepts_https_url() {
        let api = HttpBankApi::new("https://bank.example.com/api", Duration::from_secs(30), false);
        assert!(api.is_ok());
    }

    #[test]
    fn test_accepts_localhost_http() {
        let api = HttpBankApi::new("http://localhost:3000/api", Duration::from_secs(30), false);
        assert!(api.is_ok());
    }

    #[test]
    fn test_rejects_plain_http() {
        let result = HttpBankApi::new("http://bank.example.com/api", Duration::from_secs(30), false);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTPS"));
    }

    #[test]
    fn test_rejects_garbage_url() {
        let result = HttpBankApi::new("not a url", Duration::from_secs(30), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let api =
            HttpBankApi::new("https://localhost:3000/api/", Duration::from_secs(30), true).unwrap();
        assert_eq!(api.url("/payments"), "https://localhost:3000/api/payments");
    }

    #[test]
    fn test_payment_request_wire_shape() {
        let request = PaymentRequest {
            amount: Decimal::new(100, 0),
            currency: Currency::USD,
            provider: Provider::Swift,
            recipient_account: "12345678".to_string(),
            swift_code: "ABNANL2A".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], "100");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["provider"], "SWIFT");
        assert_eq!(json["recipientAccount"], "12345678");
        assert_eq!(json["swiftCode"], "ABNANL2A");
        assert!(json.get("payeeName").is_none());
        assert!(json.get("description").is_none());
    }
}
