use super::entry::{EntryDraft, ExistingEntry, find_linked_entry};
use super::transaction::{BalanceTransaction, Charge, Refund};
use crate::error::Result;
use async_trait::async_trait;

/// Read side of the payment processor (Stripe). `list_transactions` returns
/// the full balance history newest-first; the two lookups resolve a refund
/// back to the balance transaction of its original charge.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn list_transactions(&self) -> Result<Vec<BalanceTransaction>>;
    async fn get_refund(&self, refund_id: &str) -> Result<Refund>;
    async fn get_charge(&self, charge_id: &str) -> Result<Charge>;
}

/// The accounting service (NOCFO), the system of record for documents.
#[async_trait]
pub trait AccountingService: Send + Sync {
    async fn load_entries(&self) -> Result<Vec<ExistingEntry>>;

    /// Posts a new document. Returns the service's created record verbatim;
    /// a non-success response surfaces its body as the error detail.
    async fn create_entry(&self, draft: &EntryDraft) -> Result<serde_json::Value>;

    /// Patches an existing document, same failure contract as `create_entry`.
    async fn update_entry(&self, entry_id: &str, draft: &EntryDraft) -> Result<serde_json::Value>;

    /// Resolves the entry a transaction maps onto via the description-prefix
    /// convention. Override to swap the key strategy.
    fn find_existing_entry<'a>(
        &self,
        transaction_id: &str,
        entries: &'a [ExistingEntry],
    ) -> Option<&'a ExistingEntry> {
        find_linked_entry(transaction_id, entries)
    }

    /// True when the stored entry already carries exactly what `draft` would
    /// write: same description, date and blueprint lines.
    fn is_entry_unchanged(&self, existing: &ExistingEntry, draft: &EntryDraft) -> bool {
        existing.description == draft.description
            && existing.date == draft.date
            && existing.blueprint == draft.blueprint
    }
}

pub type PaymentProviderBox = Box<dyn PaymentProvider>;
pub type AccountingServiceBox = Box<dyn AccountingService>;
