use uuid::Uuid;

use crate::ledger::{Book, Client};

use super::{ServiceError, ServiceResult};

/// Validated CRUD helpers for clients.
pub struct ClientService;

impl ClientService {
    /// A client cannot exist without an associated supplier; creation is
    /// blocked entirely while no suppliers exist.
    pub fn add(book: &mut Book, name: &str, supplier_id: Uuid) -> ServiceResult<Uuid> {
        if book.suppliers.is_empty() {
            return Err(ServiceError::Invalid(
                "Create a supplier before adding clients".into(),
            ));
        }
        let name = Self::validate_name(name)?;
        Self::ensure_supplier_exists(book, supplier_id)?;
        Ok(book.add_client(Client::new(name, supplier_id)))
    }

    /// Renames the client and/or reassigns it to another existing supplier.
    pub fn edit(book: &mut Book, id: Uuid, name: &str, supplier_id: Uuid) -> ServiceResult<()> {
        let name = Self::validate_name(name)?;
        Self::ensure_supplier_exists(book, supplier_id)?;
        let client = book
            .client_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Client not found".into()))?;
        client.name = name;
        client.supplier_id = supplier_id;
        book.touch();
        Ok(())
    }

    pub fn remove(book: &mut Book, id: Uuid) -> ServiceResult<Client> {
        book.remove_client(id)
            .ok_or_else(|| ServiceError::Invalid("Client not found".into()))
    }

    pub fn list(book: &Book) -> Vec<&Client> {
        book.clients.iter().collect()
    }

    fn validate_name(candidate: &str) -> ServiceResult<String> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::Invalid("Client name must not be empty".into()));
        }
        Ok(trimmed.to_string())
    }

    fn ensure_supplier_exists(book: &Book, supplier_id: Uuid) -> ServiceResult<()> {
        if book.supplier(supplier_id).is_some() {
            Ok(())
        } else {
            Err(ServiceError::Invalid(
                "Referenced supplier does not exist".into(),
            ))
        }
    }
}
