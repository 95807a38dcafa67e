//! Form validation
//!
//! Pure, side-effect-free rules mapping each draft to field-level error
//! messages. A form is valid exactly when its `FieldErrors` is empty; the
//! full rule set is re-run on every submission attempt.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::auth::{LoginDraft, RegistrationDraft};
use crate::domain::payment::PaymentDraft;

const MAX_PAYMENT_AMOUNT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Field name -> human-readable message, for failing fields only.
///
/// Keys use the wire-level field names (`accountNumber`, `swiftCode`, ...)
/// so messages line up with what the server reports. BTreeMap keeps display
/// order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl LoginDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.account_number.trim().is_empty() {
            errors.insert("accountNumber", "Account number is required");
        } else if self.account_number.len() < 8 {
            errors.insert("accountNumber", "Account number must be at least 8 characters");
        }

        if self.password.trim().is_empty() {
            errors.insert("password", "Password is required");
        } else if self.password.len() < 6 {
            errors.insert("password", "Password must be at least 6 characters");
        }

        errors
    }
}

impl RegistrationDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let full_name_re = Regex::new(r"^[A-Za-z\s]{2,50}$").unwrap();
        let id_re = Regex::new(r"^[0-9]{13}$").unwrap();
        let account_re = Regex::new(r"^[0-9]{10,20}$").unwrap();

        if self.full_name.trim().is_empty() {
            errors.insert("fullName", "Full name is required");
        } else if !full_name_re.is_match(&self.full_name) {
            errors.insert("fullName", "Name must be 2-50 letters only");
        }

        if self.id_number.trim().is_empty() {
            errors.insert("idNumber", "ID number is required");
        } else if !id_re.is_match(&self.id_number) {
            errors.insert("idNumber", "ID must be exactly 13 digits");
        }

        if self.account_number.trim().is_empty() {
            errors.insert("accountNumber", "Account number is required");
        } else if !account_re.is_match(&self.account_number) {
            errors.insert("accountNumber", "Account must be 10-20 digits only");
        }

        if self.password.trim().is_empty() {
            errors.insert("password", "Password is required");
        } else if !strong_password(&self.password) {
            errors.insert(
                "password",
                "Password must be 8+ chars with uppercase, lowercase, number & symbol",
            );
        }

        if self.password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match");
        }

        errors
    }
}

/// 8+ chars containing lowercase, uppercase, a digit, and one of `@$!%*?&`
fn strong_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| "@$!%*?&".contains(c))
}

impl PaymentDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        match self.amount.trim().parse::<Decimal>() {
            Ok(amount) if amount > Decimal::ZERO => {
                if amount > MAX_PAYMENT_AMOUNT {
                    errors.insert("amount", "Amount cannot exceed R100,000 per transaction");
                }
            }
            _ => {
                errors.insert("amount", "Please enter a valid amount greater than 0");
            }
        }

        if self.payee_name.trim().is_empty() {
            errors.insert("payeeName", "Payee name is required");
        }

        if self.payee_account.trim().is_empty() {
            errors.insert("payeeAccount", "Payee account number is required");
        } else if self.payee_account.len() < 8 {
            errors.insert("payeeAccount", "Account number must be at least 8 characters");
        }

        let swift_re = Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$").unwrap();
        if self.swift_code.trim().is_empty() {
            errors.insert("swiftCode", "SWIFT code is required");
        } else if !swift_re.is_match(&self.swift_code.to_uppercase()) {
            errors.insert("swiftCode", "Please enter a valid SWIFT code (e.g., ABNANL2A)");
        }

        if self.description.trim().is_empty() {
            errors.insert("description", "Payment description is required");
        }

        errors
    }
}
