use crate::application::mapper::EntryMapper;
use crate::domain::entry::ExistingEntry;
use crate::domain::ports::{AccountingService, AccountingServiceBox};
use crate::domain::summary::ReconciliationSummary;
use crate::domain::transaction::BalanceTransaction;
use tracing::{error, info};

/// Drives one full reconciliation pass: map each transaction, match it
/// against the documents already in the accounting service, and create or
/// update as needed.
///
/// The engine owns both collaborators and processes strictly sequentially,
/// awaiting every service call before moving on. A failure on one
/// transaction is recorded in the summary and never aborts the batch.
pub struct ReconciliationEngine {
    mapper: EntryMapper,
    accounting: AccountingServiceBox,
}

impl ReconciliationEngine {
    pub fn new(mapper: EntryMapper, accounting: AccountingServiceBox) -> Self {
        Self { mapper, accounting }
    }

    /// Processes `transactions` against the `existing` document list and
    /// returns the accumulated summary.
    ///
    /// `existing` is read once up front and not refreshed mid-run: documents
    /// created during this pass are not visible to later lookups of the same
    /// pass.
    pub async fn run(
        &self,
        transactions: &[BalanceTransaction],
        existing: &[ExistingEntry],
    ) -> ReconciliationSummary {
        let mut summary = ReconciliationSummary::new(transactions.len());

        // Stripe lists newest-first; walk the batch oldest-first so a refund
        // is handled after the payment it reverses.
        for txn in transactions.iter().rev() {
            let draft = match self.mapper.map_transaction(txn, existing).await {
                Ok(Some(draft)) => draft,
                Ok(None) => {
                    info!(id = %txn.id, kind = %txn.r#type, "skipping unhandled transaction type");
                    summary.record_skip(format!(
                        "Transaction {} of type {} is not handled.",
                        txn.id, txn.r#type
                    ));
                    continue;
                }
                Err(err) => {
                    error!(id = %txn.id, %err, "failed to map transaction");
                    summary.record_error(format!(
                        "Error processing transaction {}: {err}",
                        txn.id
                    ));
                    continue;
                }
            };

            match self.accounting.find_existing_entry(&txn.id, existing) {
                Some(entry) if self.accounting.is_entry_unchanged(entry, &draft) => {
                    info!(id = %txn.id, entry = %entry.id, "entry already exists and is unchanged");
                    summary.unchanged += 1;
                }
                Some(entry) => match self.accounting.update_entry(&entry.id, &draft).await {
                    Ok(_) => {
                        info!(id = %txn.id, entry = %entry.id, "updated entry");
                        summary.updated += 1;
                    }
                    Err(err) => {
                        error!(id = %txn.id, entry = %entry.id, %err, "failed to update entry");
                        summary.record_error(format!(
                            "Failed to update entry for transaction {}: {err}",
                            txn.id
                        ));
                    }
                },
                None => match self.accounting.create_entry(&draft).await {
                    Ok(_) => {
                        info!(id = %txn.id, "created entry");
                        summary.created += 1;
                    }
                    Err(err) => {
                        error!(id = %txn.id, %err, "failed to create entry");
                        summary.record_error(format!(
                            "Failed to create entry for transaction {}: {err}",
                            txn.id
                        ));
                    }
                },
            }
        }

        summary
    }
}
