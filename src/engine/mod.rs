//! Pure derivation functions over the entity store.
//!
//! Everything here is a synchronous, total function of the collections it is
//! handed: no caching, no mutation, no I/O. Callers recompute after every
//! mutation; memoization, if wanted, belongs to the caller.

pub mod balance;
pub mod grouping;
pub mod monthly;

pub use balance::{client_balance, clients_balance, transactions_balance, Balance};
pub use grouping::{group_clients_by_supplier, supplier_summaries, ClientGroup, SupplierSummary};
pub use monthly::{monthly_series, MonthBucket, MonthKey, SupplierFilter, SERIES_WINDOW};
