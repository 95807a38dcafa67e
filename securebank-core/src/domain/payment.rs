//! Payment domain models
//!
//! Covers the payment form draft, the wire shapes for `/api/payments`, and
//! the account details returned by `/api/accounts/details`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Supported payment currencies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    AUD,
}

impl Currency {
    pub fn all() -> [Currency; 5] {
        [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::AUD,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "US Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::JPY => "Japanese Yen",
            Currency::AUD => "Australian Dollar",
        }
    }

    /// Fixed indicative conversion rate to South African Rand, used to show
    /// the payer a local-currency equivalent before submitting.
    pub fn zar_rate(&self) -> Decimal {
        match self {
            Currency::USD => Decimal::new(1850, 2),
            Currency::EUR => Decimal::new(2015, 2),
            Currency::GBP => Decimal::new(2340, 2),
            Currency::JPY => Decimal::new(12, 2),
            Currency::AUD => Decimal::new(1230, 2),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::AUD => "AUD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "AUD" => Ok(Currency::AUD),
            other => Err(format!(
                "Unknown currency '{}'. Available: USD, EUR, GBP, JPY, AUD",
                other
            )),
        }
    }
}

/// Payment rails offered for international transfers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    #[serde(rename = "SWIFT")]
    Swift,
    #[serde(rename = "CORRESPONDENT")]
    Correspondent,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Swift => "SWIFT Network",
            Provider::Correspondent => "Correspondent Banking",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Swift => f.write_str("SWIFT"),
            Provider::Correspondent => f.write_str("CORRESPONDENT"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SWIFT" => Ok(Provider::Swift),
            "CORRESPONDENT" => Ok(Provider::Correspondent),
            other => Err(format!(
                "Unknown provider '{}'. Available: SWIFT, CORRESPONDENT",
                other
            )),
        }
    }
}

/// Payment form draft. Amount is kept as the raw input string until
/// validation; all fields stay untouched across a failed submission so the
/// user can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDraft {
    pub amount: String,
    pub currency: Currency,
    pub provider: Provider,
    pub payee_name: String,
    pub payee_account: String,
    pub swift_code: String,
    pub description: String,
}

impl PaymentDraft {
    /// ZAR equivalent of the drafted amount, if it parses.
    pub fn zar_equivalent(&self) -> Option<Decimal> {
        let amount: Decimal = self.amount.trim().parse().ok()?;
        Some((amount * self.currency.zar_rate()).round_dp(2))
    }
}

/// Body of `POST /payments`
///
/// The payee name and description are validated locally but are not part of
/// the server contract; the SWIFT code is transmitted upper-cased.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub currency: Currency,
    pub provider: Provider,
    pub recipient_account: String,
    pub swift_code: String,
}

/// A payment record as returned by `GET /payments` and `POST /payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub recipient_account: String,
    pub provider: Provider,
    #[serde(default)]
    pub submitted_to_swift: bool,
    #[serde(default)]
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub currency: Currency,
    pub amount: Decimal,
}

impl PaymentRecord {
    /// Display status derived from the processing flags.
    pub fn status(&self) -> PaymentStatus {
        if self.submitted_to_swift {
            PaymentStatus::Completed
        } else if self.verified {
            PaymentStatus::Verified
        } else {
            PaymentStatus::Pending
        }
    }

    pub fn description(&self) -> String {
        format!("Payment to {} via {}", self.recipient_account, self.provider)
    }
}

/// Processing status of a submitted payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    Completed,
    Verified,
    Pending,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Verified => "Verified",
            PaymentStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Account details from `GET /accounts/details`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub balance: Decimal,
    pub account_number: String,
    pub account_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(submitted_to_swift: bool, verified: bool) -> PaymentRecord {
        PaymentRecord {
            id: "abc123".to_string(),
            recipient_account: "12345678".to_string(),
            provider: Provider::Swift,
            submitted_to_swift,
            verified,
            created_at: Utc::now(),
            currency: Currency::USD,
            amount: Decimal::new(10000, 2),
        }
    }

    #[test]
    fn test_status_label_derivation() {
        assert_eq!(record(true, false).status(), PaymentStatus::Completed);
        assert_eq!(record(true, true).status(), PaymentStatus::Completed);
        assert_eq!(record(false, true).status(), PaymentStatus::Verified);
        assert_eq!(record(false, false).status(), PaymentStatus::Pending);
    }

    #[test]
    fn test_payment_record_deserializes_server_shape() {
        let json = r#"{
            "_id": "65f0c2",
            "recipientAccount": "99887766",
            "provider": "CORRESPONDENT",
            "submittedToSwift": false,
            "verified": true,
            "createdAt": "2025-03-12T09:30:00Z",
            "currency": "EUR",
            "amount": 250.75
        }"#;

        let record: PaymentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "65f0c2");
        assert_eq!(record.provider, Provider::Correspondent);
        assert_eq!(record.currency, Currency::EUR);
        assert_eq!(record.status(), PaymentStatus::Verified);
        assert_eq!(record.description(), "Payment to 99887766 via CORRESPONDENT");
    }

    #[test]
    fn test_zar_equivalent() {
        let draft = PaymentDraft {
            amount: "100".to_string(),
            currency: Currency::USD,
            ..Default::default()
        };
        assert_eq!(draft.zar_equivalent(), Some(Decimal::new(185000, 2)));

        let draft = PaymentDraft {
            amount: "not a number".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.zar_equivalent(), None);
    }

    #[test]
    fn test_currency_round_trips_from_str() {
        for currency in Currency::all() {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
        assert!("ZAR".parse::<Currency>().is_err());
    }
}
