pub mod json_backend;

use crate::{currency::CurrencyConfig, errors::LedgerError, ledger::Book};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends for the entity collections and the
/// currency configuration record.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Book>;
    fn save(&self, book: &Book) -> Result<()>;
    fn load_currency(&self) -> Result<CurrencyConfig>;
    fn save_currency(&self, config: &CurrencyConfig) -> Result<()>;
}

pub use json_backend::JsonStorage;
