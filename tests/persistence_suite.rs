use std::fs;

use chrono::Utc;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use fiado_core::core::services::{ClientService, SupplierService, TransactionService};
use fiado_core::currency::CurrencyConfig;
use fiado_core::engine::clients_balance;
use fiado_core::ledger::TransactionKind;
use fiado_core::storage::{JsonStorage, StorageBackend};

fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    (storage, temp)
}

#[test]
fn mutate_then_persist_roundtrips_derived_totals() {
    let (storage, _guard) = storage_with_temp_dir();
    let mut book = storage.load().unwrap();

    let supplier = SupplierService::add(&mut book, "Central", None).unwrap();
    let client = ClientService::add(&mut book, "Juan", supplier).unwrap();
    TransactionService::record(
        &mut book,
        client,
        TransactionKind::Sale,
        dec!(150.75),
        Utc::now(),
        None,
    )
    .unwrap();
    storage.save(&book).unwrap();

    let reloaded = storage.load().unwrap();
    assert_eq!(
        clients_balance(&reloaded.clients).pending(),
        clients_balance(&book.clients).pending()
    );
    assert_eq!(reloaded.clients[0].transactions[0].amount, dec!(150.75));
}

#[test]
fn corrupted_clients_document_fails_open_to_empty() {
    let (storage, guard) = storage_with_temp_dir();
    let mut book = storage.load().unwrap();
    SupplierService::add(&mut book, "Central", None).unwrap();
    storage.save(&book).unwrap();

    fs::write(guard.path().join("clients.json"), "{\"broken\":").unwrap();

    let reloaded = storage.load().expect("load must not fail");
    assert_eq!(reloaded.suppliers.len(), 1, "healthy collection survives");
    assert!(reloaded.clients.is_empty(), "corrupted collection resets");
}

#[test]
fn currency_config_persists_independently() {
    let (storage, _guard) = storage_with_temp_dir();
    let mut config = CurrencyConfig::default();
    config.select("MXN");
    storage.save_currency(&config).unwrap();

    // Collections remain untouched by currency writes.
    let book = storage.load().unwrap();
    assert!(book.suppliers.is_empty());
    assert_eq!(storage.load_currency().unwrap().code.as_str(), "MXN");
}

#[test]
fn persisted_transaction_kind_uses_original_wire_names() {
    let (storage, guard) = storage_with_temp_dir();
    let mut book = storage.load().unwrap();
    let supplier = SupplierService::add(&mut book, "Central", None).unwrap();
    let client = ClientService::add(&mut book, "Juan", supplier).unwrap();
    TransactionService::record(
        &mut book,
        client,
        TransactionKind::Sale,
        dec!(1),
        Utc::now(),
        None,
    )
    .unwrap();
    storage.save(&book).unwrap();

    let raw = fs::read_to_string(guard.path().join("clients.json")).unwrap();
    assert!(raw.contains("\"SALE\""), "kind serializes as SALE: {raw}");
}
