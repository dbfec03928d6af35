use crate::domain::entry::ExistingEntry;
use crate::domain::transaction::{BalanceTransaction, Charge, Refund};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Stripe-side data dump: the balance transactions to reconcile
/// (newest-first, as the API lists them) plus the refund and charge objects
/// needed to resolve refunds without calling the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StripeSnapshot {
    pub transactions: Vec<BalanceTransaction>,
    #[serde(default)]
    pub refunds: Vec<Refund>,
    #[serde(default)]
    pub charges: Vec<Charge>,
}

/// Reads reconciliation inputs from JSON dumps of the two services.
pub struct SnapshotReader<R: Read> {
    source: R,
}

impl<R: Read> SnapshotReader<R> {
    /// Creates a reader over any `Read` source (e.g. File, byte slice).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses a Stripe snapshot document.
    pub fn read_stripe(self) -> Result<StripeSnapshot> {
        Ok(serde_json::from_reader(self.source)?)
    }

    /// Parses a NOCFO document list.
    pub fn read_entries(self) -> Result<Vec<ExistingEntry>> {
        Ok(serde_json::from_reader(self.source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionType;

    #[test]
    fn test_read_stripe_snapshot_with_lookup_objects() {
        let data = r#"{
            "transactions": [
                {"id": "txn_refund_123", "type": "refund", "amount": -3480, "created": 1641081600, "source": "re_1234567890"},
                {"id": "txn_1234567890", "type": "payment", "amount": 3480, "created": 1640995200, "source": "ch_1234567890"}
            ],
            "refunds": [{"id": "re_1234567890", "charge": "ch_1234567890"}],
            "charges": [{"id": "ch_1234567890", "balance_transaction": "txn_1234567890"}]
        }"#;

        let snapshot = SnapshotReader::new(data.as_bytes()).read_stripe().unwrap();
        assert_eq!(snapshot.transactions.len(), 2);
        assert_eq!(snapshot.transactions[0].r#type, TransactionType::Refund);
        assert_eq!(snapshot.refunds.len(), 1);
        assert_eq!(snapshot.charges.len(), 1);
    }

    #[test]
    fn test_lookup_sections_are_optional() {
        let data = r#"{"transactions": [{"id": "txn_1", "type": "payout", "amount": -100, "created": 1640995200}]}"#;

        let snapshot = SnapshotReader::new(data.as_bytes()).read_stripe().unwrap();
        assert_eq!(
            snapshot.transactions[0].r#type,
            TransactionType::Other("payout".to_owned())
        );
        assert!(snapshot.refunds.is_empty());
        assert!(snapshot.charges.is_empty());
    }

    #[test]
    fn test_read_entries_list() {
        let data = r#"[{
            "id": "nocfo_entry_1",
            "description": "txn_1234567890 - Stripe Transaction",
            "blueprint": {
                "credit_entries": [
                    {"account_id": 4971114, "vat_code": 1, "vat_rate": "25.5", "amount": "34.8"}
                ]
            },
            "date": "2022-01-01"
        }]"#;

        let entries = SnapshotReader::new(data.as_bytes()).read_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].linked_transaction_id(), "txn_1234567890");
        assert_eq!(entries[0].blueprint.credit_entries.len(), 1);
    }

    #[test]
    fn test_malformed_snapshot_is_a_json_error() {
        let result = SnapshotReader::new(&b"{\"transactions\": 5}"[..]).read_stripe();
        assert!(matches!(
            result,
            Err(crate::error::ReconcileError::Json(_))
        ));
    }
}
