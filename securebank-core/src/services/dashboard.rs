//! Dashboard service - account overview and payment history

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{AccountDetails, Currency, PaymentRecord};
use crate::ports::BankApi;
use crate::session::SessionStore;

/// Account overview for the dashboard view
pub struct DashboardService {
    api: Arc<dyn BankApi>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn BankApi>) -> Self {
        Self { api }
    }

    /// Fetch account details and payment history for the current session.
    pub fn overview(&self, session: &SessionStore) -> Result<DashboardOverview> {
        let token = session
            .token()
            .ok_or_else(|| Error::auth("Please log in again."))?;

        let account = self.api.account_details(token)?;
        let payments = self.api.payments(token)?;

        let transactions: Vec<TransactionView> =
            payments.iter().map(TransactionView::from_record).collect();

        Ok(DashboardOverview {
            greeting_name: session.display_name(),
            transaction_count: transactions.len(),
            account,
            transactions,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub greeting_name: String,
    pub account: AccountDetails,
    pub transaction_count: usize,
    pub transactions: Vec<TransactionView>,
}

/// A payment record prepared for display
#[derive(Debug, Serialize)]
pub struct TransactionView {
    pub id: String,
    pub description: String,
    pub date: String,
    pub currency: Currency,
    pub amount: String,
    pub status: &'static str,
}

impl TransactionView {
    fn from_record(record: &PaymentRecord) -> Self {
        Self {
            id: record.id.clone(),
            description: record.description(),
            date: record.created_at.format("%Y-%m-%d").to_string(),
            currency: record.currency,
            amount: format!("{:.2}", record.amount),
            status: record.status().label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    use crate::domain::{
        Credentials, LoginResponse, PaymentRequest, Provider, RegistrationRequest,
    };

    struct FakeApi;

    impl BankApi for FakeApi {
        fn login(&self, _credentials: &Credentials) -> Result<LoginResponse> {
            unimplemented!()
        }

        fn register(&self, _request: &RegistrationRequest) -> Result<()> {
            unimplemented!()
        }

        fn account_details(&self, _token: &str) -> Result<AccountDetails> {
            Ok(AccountDetails {
                balance: Decimal::new(1234550, 2),
                account_number: "1234567890".to_string(),
                account_type: "Cheque".to_string(),
            })
        }

        fn payments(&self, _token: &str) -> Result<Vec<PaymentRecord>> {
            Ok(vec![
                PaymentRecord {
                    id: "p1".to_string(),
                    recipient_account: "99887766".to_string(),
                    provider: Provider::Swift,
                    submitted_to_swift: true,
                    verified: true,
                    created_at: Utc.with_ymd_and_hms(2025, 3, 12, 9, 30, 0).unwrap(),
                    currency: Currency::USD,
                    amount: Decimal::new(10000, 2),
                },
                PaymentRecord {
                    id: "p2".to_string(),
                    recipient_account: "11223344".to_string(),
                    provider: Provider::Correspondent,
                    submitted_to_swift: false,
                    verified: false,
                    created_at: Utc.with_ymd_and_hms(2025, 3, 13, 10, 0, 0).unwrap(),
                    currency: Currency::EUR,
                    amount: Decimal::new(5025, 2),
                },
            ])
        }

        fn submit_payment(&self, _request: &PaymentRequest, _token: &str) -> Result<PaymentRecord> {
            unimplemented!()
        }
    }

    #[test]
    fn test_overview_requires_session() {
        let dir = tempdir().unwrap();
        let session = SessionStore::load(dir.path());
        let service = DashboardService::new(Arc::new(FakeApi));

        assert!(matches!(service.overview(&session), Err(Error::Auth(_))));
    }

    #[test]
    fn test_overview_maps_records_for_display() {
        let dir = tempdir().unwrap();
        let mut session = SessionStore::load(dir.path());
        session.set_token("tok").unwrap();

        let service = DashboardService::new(Arc::new(FakeApi));
        let overview = service.overview(&session).unwrap();

        assert_eq!(overview.transaction_count, 2);
        assert_eq!(overview.account.account_number, "1234567890");

        let first = &overview.transactions[0];
        assert_eq!(first.status, "Completed");
        assert_eq!(first.description, "Payment to 99887766 via SWIFT");
        assert_eq!(first.date, "2025-03-12");
        assert_eq!(first.amount, "100.00");

        let second = &overview.transactions[1];
        assert_eq!(second.status, "Pending");
        assert_eq!(second.amount, "50.25");
    }
}
