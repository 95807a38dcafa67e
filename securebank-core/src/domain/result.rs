//! Result and error types for the core library

use thiserror::Error;

use crate::domain::validate::FieldErrors;

/// Core library error type
///
/// Remote-call failures are split by which form surfaced them so callers
/// can keep the form editable and show the right fallback message.
#[derive(Error, Debug)]
pub enum Error {
    /// Field-level validation failures. Never reaches the network layer.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Login or registration rejected by the server (or no session present).
    #[error("{0}")]
    Auth(String),

    /// Payment rejected by the server.
    #[error("{0}")]
    Payment(String),

    /// Transport failure with no structured payload.
    #[error("{0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an auth error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a payment error
    pub fn payment(msg: impl Into<String>) -> Self {
        Self::Payment(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The message a form should display for this failure, without the
    /// variant prefix noise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::Auth(msg) | Self::Payment(msg) | Self::Network(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_strips_nothing_from_remote_errors() {
        let err = Error::auth("Invalid credentials");
        assert_eq!(err.user_message(), "Invalid credentials");

        let err = Error::payment("Payment failed. Please try again.");
        assert_eq!(err.user_message(), "Payment failed. Please try again.");
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let mut errors = FieldErrors::default();
        errors.insert("amount", "Please enter a valid amount greater than 0");
        let err = Error::Validation(errors);
        assert!(err.user_message().contains("amount"));
    }
}
