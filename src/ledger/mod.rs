//! Ledger domain models: suppliers, clients, and their credit movements.

pub mod book;
pub mod client;
pub mod common;
pub mod supplier;
pub mod transaction;

pub use book::Book;
pub use client::Client;
pub use common::{Identifiable, NamedEntity};
pub use supplier::Supplier;
pub use transaction::{Transaction, TransactionKind};
