use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{client::Client, supplier::Supplier};

/// In-memory entity store holding the supplier and client collections.
///
/// The book carries no derived state: balances, rankings, and series are
/// always recomputed from the transaction sets by the `engine` module, so no
/// cached figure can drift from its source.
#[derive(Debug, Clone)]
pub struct Book {
    pub suppliers: Vec<Supplier>,
    pub clients: Vec<Client>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            suppliers: Vec::new(),
            clients: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a book from independently persisted collections.
    pub fn from_collections(suppliers: Vec<Supplier>, clients: Vec<Client>) -> Self {
        let now = Utc::now();
        Self {
            suppliers,
            clients,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_supplier(&mut self, supplier: Supplier) -> Uuid {
        let id = supplier.id;
        self.suppliers.push(supplier);
        self.touch();
        id
    }

    pub fn add_client(&mut self, client: Client) -> Uuid {
        let id = client.id;
        self.clients.push(client);
        self.touch();
        id
    }

    pub fn supplier(&self, id: Uuid) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.id == id)
    }

    pub fn supplier_mut(&mut self, id: Uuid) -> Option<&mut Supplier> {
        self.suppliers.iter_mut().find(|supplier| supplier.id == id)
    }

    pub fn client(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn client_mut(&mut self, id: Uuid) -> Option<&mut Client> {
        self.clients.iter_mut().find(|client| client.id == id)
    }

    /// True while any client references the supplier.
    pub fn supplier_is_referenced(&self, id: Uuid) -> bool {
        self.clients.iter().any(|client| client.supplier_id == id)
    }

    /// Removes the supplier without any integrity check; callers go through
    /// the service layer, which refuses removal while clients reference it.
    pub fn remove_supplier(&mut self, id: Uuid) -> Option<Supplier> {
        let index = self.suppliers.iter().position(|supplier| supplier.id == id)?;
        let removed = self.suppliers.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn remove_client(&mut self, id: Uuid) -> Option<Client> {
        let index = self.clients.iter().position(|client| client.id == id)?;
        let removed = self.clients.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}
