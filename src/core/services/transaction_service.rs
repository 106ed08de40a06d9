use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::{Book, Transaction, TransactionKind};

use super::{ServiceError, ServiceResult};

/// Append-only entry point for credit movements.
pub struct TransactionService;

impl TransactionService {
    /// Records a movement against a client. Amounts must be strictly
    /// positive; nothing reaches the store otherwise.
    pub fn record(
        book: &mut Book,
        client_id: Uuid,
        kind: TransactionKind,
        amount: Decimal,
        date: DateTime<Utc>,
        note: Option<&str>,
    ) -> ServiceResult<Uuid> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid("Amount must be positive".into()));
        }
        let client = book
            .client_mut(client_id)
            .ok_or_else(|| ServiceError::Invalid("Client not found".into()))?;
        let mut transaction = Transaction::new(kind, amount, date);
        if let Some(note) = note {
            transaction = transaction.with_note(note);
        }
        let id = client.record(transaction);
        book.touch();
        Ok(id)
    }

    /// Records from raw user input; non-numeric input is rejected with no
    /// store mutation.
    pub fn record_from_input(
        book: &mut Book,
        client_id: Uuid,
        kind: TransactionKind,
        amount_input: &str,
        date: DateTime<Utc>,
        note: Option<&str>,
    ) -> ServiceResult<Uuid> {
        let amount = Self::parse_amount(amount_input)?;
        Self::record(book, client_id, kind, amount, date, note)
    }

    pub fn parse_amount(input: &str) -> ServiceResult<Decimal> {
        let amount: Decimal = input
            .trim()
            .parse()
            .map_err(|_| ServiceError::Invalid(format!("`{}` is not a valid amount", input)))?;
        if amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid("Amount must be positive".into()));
        }
        Ok(amount)
    }
}
