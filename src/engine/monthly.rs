use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::{Client, TransactionKind};

/// Number of trailing month buckets retained by the series.
pub const SERIES_WINDOW: usize = 6;

/// Calendar-month bucket key. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: &DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Sold/paid totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    pub key: MonthKey,
    pub sold: Decimal,
    pub paid: Decimal,
}

/// Restricts the series to one supplier's clients, or keeps them all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierFilter {
    All,
    One(Uuid),
}

impl SupplierFilter {
    fn matches(&self, client: &Client) -> bool {
        match self {
            SupplierFilter::All => true,
            SupplierFilter::One(id) => client.supplier_id == *id,
        }
    }
}

/// Buckets every transaction of the filtered client set into calendar
/// months, chronologically ascending, windowed to the trailing
/// [`SERIES_WINDOW`] buckets.
///
/// Accumulation goes through a `BTreeMap` keyed by `(year, month)`, so the
/// output is identical for any insertion order of the transactions. Month
/// labels are a formatting concern and are not produced here.
pub fn monthly_series(clients: &[Client], filter: SupplierFilter) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<MonthKey, (Decimal, Decimal)> = BTreeMap::new();
    for client in clients.iter().filter(|client| filter.matches(client)) {
        for transaction in &client.transactions {
            let entry = buckets
                .entry(MonthKey::from_date(&transaction.date))
                .or_default();
            match transaction.kind {
                TransactionKind::Sale => entry.0 += transaction.amount,
                TransactionKind::Payment => entry.1 += transaction.amount,
            }
        }
    }

    let mut series: Vec<MonthBucket> = buckets
        .into_iter()
        .map(|(key, (sold, paid))| MonthBucket { key, sold, paid })
        .collect();
    if series.len() > SERIES_WINDOW {
        series.drain(..series.len() - SERIES_WINDOW);
    }
    series
}
