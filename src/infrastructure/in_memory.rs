use crate::domain::entry::{EntryDraft, ExistingEntry};
use crate::domain::ports::{AccountingService, PaymentProvider};
use crate::domain::transaction::{BalanceTransaction, Charge, Refund};
use crate::error::{ReconcileError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Payment provider backed by pre-loaded data: a transaction list plus
/// refund and charge objects for the two-hop refund resolution. Stands in
/// for the Stripe API in the snapshot driver and in tests.
#[derive(Default, Clone)]
pub struct InMemoryPaymentProvider {
    transactions: Vec<BalanceTransaction>,
    refunds: HashMap<String, Refund>,
    charges: HashMap<String, Charge>,
}

impl InMemoryPaymentProvider {
    pub fn new(
        transactions: Vec<BalanceTransaction>,
        refunds: Vec<Refund>,
        charges: Vec<Charge>,
    ) -> Self {
        Self {
            transactions,
            refunds: refunds.into_iter().map(|r| (r.id.clone(), r)).collect(),
            charges: charges.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}

#[async_trait]
impl PaymentProvider for InMemoryPaymentProvider {
    async fn list_transactions(&self) -> Result<Vec<BalanceTransaction>> {
        Ok(self.transactions.clone())
    }

    async fn get_refund(&self, refund_id: &str) -> Result<Refund> {
        self.refunds
            .get(refund_id)
            .cloned()
            .ok_or_else(|| ReconcileError::Collaborator(format!("No such refund: {refund_id}")))
    }

    async fn get_charge(&self, charge_id: &str) -> Result<Charge> {
        self.charges
            .get(charge_id)
            .cloned()
            .ok_or_else(|| ReconcileError::Collaborator(format!("No such charge: {charge_id}")))
    }
}

/// Accounting service that records create/update calls instead of talking to
/// the NOCFO API. Shares its state across clones so a driver or test can
/// inspect what a run would have posted.
#[derive(Default, Clone)]
pub struct InMemoryAccountingService {
    entries: Arc<RwLock<Vec<ExistingEntry>>>,
    created: Arc<RwLock<Vec<EntryDraft>>>,
    updated: Arc<RwLock<Vec<(String, EntryDraft)>>>,
}

impl InMemoryAccountingService {
    pub fn new(entries: Vec<ExistingEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
            ..Self::default()
        }
    }

    /// Drafts posted through `create_entry`, in call order.
    pub async fn created(&self) -> Vec<EntryDraft> {
        self.created.read().await.clone()
    }

    /// `(entry_id, draft)` pairs posted through `update_entry`, in call order.
    pub async fn updated(&self) -> Vec<(String, EntryDraft)> {
        self.updated.read().await.clone()
    }
}

#[async_trait]
impl AccountingService for InMemoryAccountingService {
    async fn load_entries(&self) -> Result<Vec<ExistingEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn create_entry(&self, draft: &EntryDraft) -> Result<serde_json::Value> {
        let mut created = self.created.write().await;
        created.push(draft.clone());
        Ok(serde_json::json!({ "id": format!("draft_{}", created.len()) }))
    }

    async fn update_entry(&self, entry_id: &str, draft: &EntryDraft) -> Result<serde_json::Value> {
        self.updated
            .write()
            .await
            .push((entry_id.to_owned(), draft.clone()));
        Ok(serde_json::json!({ "id": entry_id }))
    }
}
