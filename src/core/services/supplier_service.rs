use uuid::Uuid;

use crate::ledger::{Book, Supplier};

use super::{ServiceError, ServiceResult};

/// Validated CRUD helpers for suppliers.
pub struct SupplierService;

impl SupplierService {
    pub fn add(book: &mut Book, name: &str, description: Option<&str>) -> ServiceResult<Uuid> {
        let name = Self::validate_name(name)?;
        let mut supplier = Supplier::new(name);
        supplier.description = normalized(description);
        Ok(book.add_supplier(supplier))
    }

    pub fn edit(
        book: &mut Book,
        id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> ServiceResult<()> {
        let name = Self::validate_name(name)?;
        let supplier = book
            .supplier_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Supplier not found".into()))?;
        supplier.name = name;
        supplier.description = normalized(description);
        book.touch();
        Ok(())
    }

    /// Refused outright while any client references the supplier; both
    /// collections are left unchanged on refusal.
    pub fn remove(book: &mut Book, id: Uuid) -> ServiceResult<Supplier> {
        if book.supplier_is_referenced(id) {
            return Err(ServiceError::Integrity(
                "Supplier has associated clients".into(),
            ));
        }
        book.remove_supplier(id)
            .ok_or_else(|| ServiceError::Invalid("Supplier not found".into()))
    }

    pub fn list(book: &Book) -> Vec<&Supplier> {
        book.suppliers.iter().collect()
    }

    fn validate_name(candidate: &str) -> ServiceResult<String> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::Invalid(
                "Supplier name must not be empty".into(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

fn normalized(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
