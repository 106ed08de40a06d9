use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single credit movement recorded against a client. Immutable once
/// recorded: there is no update or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Direction of a credit movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Credit extension increasing the client's owed balance.
    Sale,
    /// Received funds decreasing the client's owed balance.
    Payment,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Decimal, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        if !note.trim().is_empty() {
            self.note = Some(note);
        }
        self
    }

    pub fn is_sale(&self) -> bool {
        matches!(self.kind, TransactionKind::Sale)
    }

    pub fn is_payment(&self) -> bool {
        matches!(self.kind, TransactionKind::Payment)
    }
}
