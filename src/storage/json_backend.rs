use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    currency::CurrencyConfig,
    ledger::{Book, Client, Supplier},
    utils::{app_data_dir, ensure_dir},
};

use super::{Result, StorageBackend};

const SUPPLIERS_FILE: &str = "suppliers.json";
const CLIENTS_FILE: &str = "clients.json";
const CURRENCY_FILE: &str = "currency.json";
const TMP_SUFFIX: &str = "tmp";

/// JSON file persistence: three independently serialized documents under
/// the application data directory.
///
/// Loading is fail-open: a structurally invalid document is discarded
/// wholesale (logged, reset to empty/default) rather than partially
/// recovered or propagated as a fatal failure.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn suppliers_file(&self) -> PathBuf {
        self.root.join(SUPPLIERS_FILE)
    }

    fn clients_file(&self) -> PathBuf {
        self.root.join(CLIENTS_FILE)
    }

    fn currency_file(&self) -> PathBuf {
        self.root.join(CURRENCY_FILE)
    }

    fn read_or_reset<T>(&self, path: &Path, collection: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if !path.exists() {
            return Ok(T::default());
        }
        let data = fs::read_to_string(path)?;
        match serde_json::from_str(&data) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(
                    collection,
                    error = %err,
                    "discarding corrupted document, resetting to empty"
                );
                Ok(T::default())
            }
        }
    }

    fn write_document<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Book> {
        let suppliers: Vec<Supplier> = self.read_or_reset(&self.suppliers_file(), "suppliers")?;
        let clients: Vec<Client> = self.read_or_reset(&self.clients_file(), "clients")?;
        Ok(Book::from_collections(suppliers, clients))
    }

    fn save(&self, book: &Book) -> Result<()> {
        self.write_document(&self.suppliers_file(), &book.suppliers)?;
        self.write_document(&self.clients_file(), &book.clients)?;
        Ok(())
    }

    fn load_currency(&self) -> Result<CurrencyConfig> {
        self.read_or_reset(&self.currency_file(), "currency")
    }

    fn save_currency(&self, config: &CurrencyConfig) -> Result<()> {
        self.write_document(&self.currency_file(), config)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{ClientService, SupplierService};
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut book = Book::new();
        let supplier = SupplierService::add(&mut book, "Central", Some("mayorista")).unwrap();
        ClientService::add(&mut book, "Juan", supplier).unwrap();
        storage.save(&book).expect("save book");

        let loaded = storage.load().expect("load book");
        assert_eq!(loaded.suppliers.len(), 1);
        assert_eq!(loaded.clients.len(), 1);
        assert_eq!(loaded.clients[0].supplier_id, supplier);
    }

    #[test]
    fn missing_files_load_as_empty_state() {
        let (storage, _guard) = storage_with_temp_dir();
        let book = storage.load().expect("load empty");
        assert!(book.suppliers.is_empty());
        assert!(book.clients.is_empty());
        assert_eq!(storage.load_currency().unwrap(), CurrencyConfig::default());
    }

    #[test]
    fn corrupted_collection_resets_to_empty() {
        let (storage, guard) = storage_with_temp_dir();
        fs::write(guard.path().join(SUPPLIERS_FILE), "{not json").unwrap();
        let book = storage.load().expect("fail-open load");
        assert!(book.suppliers.is_empty());
    }

    #[test]
    fn corrupted_currency_resets_to_default() {
        let (storage, guard) = storage_with_temp_dir();
        fs::write(guard.path().join(CURRENCY_FILE), "[1, 2, 3]").unwrap();
        assert_eq!(storage.load_currency().unwrap(), CurrencyConfig::default());
    }

    #[test]
    fn currency_roundtrip_preserves_selection() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut config = CurrencyConfig::default();
        config.select("PEN");
        config.show_decimals = false;
        storage.save_currency(&config).unwrap();
        assert_eq!(storage.load_currency().unwrap(), config);
    }
}
