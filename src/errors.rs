use thiserror::Error;

/// Error type that captures ledger-level failures outside the mutation
/// boundary. Validation and integrity refusals live in the service layer.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Persistence error: {0}")]
    Storage(String),
}
