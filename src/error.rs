use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReconcileError>;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Invalid transaction source for refund {0}")]
    InvalidReference(String),
    #[error("Invalid charge reference for refund {0}")]
    InvalidChargeReference(String),
    #[error("No original entry found for refund transaction {0}")]
    OriginalEntryNotFound(String),
    #[error("No credit entry found for original transaction {0}")]
    CreditLineNotFound(String),
    #[error("{0}")]
    Collaborator(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
