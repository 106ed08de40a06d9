#![doc(test(attr(deny(warnings))))]

//! Fiado Core tracks credit extended to clients on behalf of suppliers and
//! the payments received against it. The heart of the crate is the ledger
//! aggregation engine: pure functions turning append-only transaction lists
//! into balances, ranked supplier groupings, and monthly series.

pub mod core;
pub mod currency;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fiado Core tracing initialized.");
    });
}
