//! Mutation boundary: every write to the entity store passes through one of
//! these services, which enforce the validation and referential-integrity
//! rules before any state changes.

pub mod client_service;
pub mod supplier_service;
pub mod transaction_service;

pub use client_service::ClientService;
pub use supplier_service::SupplierService;
pub use transaction_service::TransactionService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// Invalid input rejected before any store mutation.
    #[error("{0}")]
    Invalid(String),
    /// Referential-integrity refusal; no partial mutation occurs.
    #[error("{0}")]
    Integrity(String),
}
