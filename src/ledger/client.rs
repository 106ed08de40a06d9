use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Identifiable, NamedEntity};
use super::transaction::Transaction;

/// A client holding credit extended on behalf of exactly one supplier.
///
/// The `supplier_id` reference is mandatory at creation but may dangle if the
/// supplier is later removed through a path that bypasses the integrity
/// check; the engine tolerates that by grouping such clients under an
/// "unknown supplier" bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub supplier_id: Uuid,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Client {
    pub fn new(name: impl Into<String>, supplier_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            supplier_id,
            transactions: Vec::new(),
        }
    }

    /// Appends a movement, newest first for display. The derived
    /// computations never depend on this ordering.
    pub fn record(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        id
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

impl Identifiable for Client {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Client {
    fn name(&self) -> &str {
        &self.name
    }
}
