use rust_decimal::Decimal;

use crate::ledger::{Client, Transaction, TransactionKind};

/// Sold/paid totals derived from a transaction set.
///
/// `pending` is always computed from the two sums rather than stored, so the
/// `pending = sold - paid` invariant cannot be violated by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    pub sold: Decimal,
    pub paid: Decimal,
}

impl Balance {
    pub fn pending(&self) -> Decimal {
        self.sold - self.paid
    }

    fn absorb(&mut self, transaction: &Transaction) {
        match transaction.kind {
            TransactionKind::Sale => self.sold += transaction.amount,
            TransactionKind::Payment => self.paid += transaction.amount,
        }
    }

    fn merge(mut self, other: Balance) -> Balance {
        self.sold += other.sold;
        self.paid += other.paid;
        self
    }
}

/// Sums an arbitrary transaction sequence. Order-independent; an empty
/// sequence yields an all-zero balance.
pub fn transactions_balance<'a, I>(transactions: I) -> Balance
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut balance = Balance::default();
    for transaction in transactions {
        balance.absorb(transaction);
    }
    balance
}

/// Balance of a single client.
pub fn client_balance(client: &Client) -> Balance {
    transactions_balance(&client.transactions)
}

/// Aggregate balance over a client set; used for global and per-supplier
/// totals so they are always the sum of their constituents.
pub fn clients_balance<'a, I>(clients: I) -> Balance
where
    I: IntoIterator<Item = &'a Client>,
{
    clients
        .into_iter()
        .map(client_balance)
        .fold(Balance::default(), Balance::merge)
}
