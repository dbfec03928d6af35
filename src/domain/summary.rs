use serde::Serialize;

/// Outcome counters for one reconciliation pass.
///
/// Built incrementally while the engine walks the batch, returned to the
/// caller and never persisted. Entries that already match their transaction
/// are counted under `unchanged` so a no-op run is distinguishable from an
/// empty one.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ReconciliationSummary {
    pub total_transactions: usize,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub unchanged: usize,
    pub errors: usize,
    pub skipped_reasons: Vec<String>,
    pub error_reasons: Vec<String>,
}

impl ReconciliationSummary {
    pub fn new(total_transactions: usize) -> Self {
        Self {
            total_transactions,
            ..Self::default()
        }
    }

    pub fn record_skip(&mut self, reason: String) {
        self.skipped += 1;
        self.skipped_reasons.push(reason);
    }

    pub fn record_error(&mut self, reason: String) {
        self.errors += 1;
        self.error_reasons.push(reason);
    }
}
