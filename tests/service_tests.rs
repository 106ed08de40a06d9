use chrono::Utc;
use rust_decimal_macros::dec;

use fiado_core::core::services::{
    ClientService, ServiceError, SupplierService, TransactionService,
};
use fiado_core::engine::clients_balance;
use fiado_core::ledger::{Book, TransactionKind};

fn prepared_book() -> Book {
    let mut book = Book::new();
    let supplier = SupplierService::add(&mut book, "Distribuidora Central", Some("mayorista"))
        .expect("supplier");
    ClientService::add(&mut book, "Juan Pérez", supplier).expect("client");
    book
}

#[test]
fn supplier_client_transaction_flow() {
    let mut book = prepared_book();
    let client_id = book.clients[0].id;

    TransactionService::record(
        &mut book,
        client_id,
        TransactionKind::Sale,
        dec!(500),
        Utc::now(),
        Some("factura #123"),
    )
    .unwrap();
    TransactionService::record(
        &mut book,
        client_id,
        TransactionKind::Payment,
        dec!(200),
        Utc::now(),
        None,
    )
    .unwrap();

    let totals = clients_balance(&book.clients);
    assert_eq!(totals.sold, dec!(500));
    assert_eq!(totals.paid, dec!(200));
    assert_eq!(totals.pending(), dec!(300));
}

#[test]
fn invalid_amounts_never_reach_derived_totals() {
    let mut book = prepared_book();
    let client_id = book.clients[0].id;

    for input in ["0", "-25", "abc", ""] {
        let result = TransactionService::record_from_input(
            &mut book,
            client_id,
            TransactionKind::Sale,
            input,
            Utc::now(),
            None,
        );
        assert!(result.is_err(), "input `{input}` must be rejected");
    }

    let totals = clients_balance(&book.clients);
    assert_eq!(totals.pending(), rust_decimal::Decimal::ZERO);
    assert_eq!(book.clients[0].transaction_count(), 0);
}

#[test]
fn removing_referenced_supplier_leaves_collections_unchanged() {
    let mut book = prepared_book();
    let supplier_id = book.suppliers[0].id;
    let before_suppliers = book.suppliers.clone();
    let before_clients = book.clients.clone();

    let err = SupplierService::remove(&mut book, supplier_id).expect_err("must refuse");
    assert!(matches!(err, ServiceError::Integrity(_)));
    assert_eq!(book.suppliers, before_suppliers);
    assert_eq!(book.clients, before_clients);
}

#[test]
fn client_creation_blocked_without_any_supplier() {
    let mut book = Book::new();
    let err = ClientService::add(&mut book, "Juan", uuid::Uuid::new_v4()).expect_err("blocked");
    let message = format!("{err}");
    assert!(message.contains("supplier"), "unexpected error: {message}");
}

#[test]
fn supplier_rename_keeps_client_reference_intact() {
    let mut book = prepared_book();
    let supplier_id = book.suppliers[0].id;

    SupplierService::edit(&mut book, supplier_id, "Central Renombrada", None).unwrap();
    assert_eq!(book.suppliers[0].name, "Central Renombrada");
    assert_eq!(book.clients[0].supplier_id, supplier_id);
}
