//! # Transaction Ledger
//!
//! Append-only log of sale, expense and restock transactions.
//!
//! No update or delete is exposed: financial history is immutable once
//! written. Insertion order is chronological order.

use crate::types::Transaction;

/// The append-only transaction log aggregate.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
        }
    }

    /// Builds a ledger from persisted records, preserving their order.
    pub fn from_records(transactions: Vec<Transaction>) -> Self {
        Ledger { transactions }
    }

    /// Appends a transaction and returns a reference to the stored record.
    pub fn record(&mut self, transaction: Transaction) -> &Transaction {
        self.transactions.push(transaction);
        self.transactions
            .last()
            .expect("record was just pushed")
    }

    /// The full log in chronological order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The most recent transactions, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev().take(n)
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::TransactionType;

    fn tx(id: &str, total: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: "2024-03-01T08:30:00Z".parse().unwrap(),
            kind: TransactionType::Sale,
            total: Money::new(total),
            items: None,
            note: None,
        }
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut ledger = Ledger::new();
        ledger.record(tx("a", 1_000));
        ledger.record(tx("b", 2_000));
        ledger.record(tx("c", 3_000));

        let ids: Vec<&str> = ledger.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut ledger = Ledger::new();
        for i in 0..5 {
            ledger.record(tx(&format!("t{i}"), 1_000));
        }

        let recent: Vec<&str> = ledger.recent(2).map(|t| t.id.as_str()).collect();
        assert_eq!(recent, vec!["t4", "t3"]);

        // Asking for more than exists returns everything
        assert_eq!(ledger.recent(100).count(), 5);
    }
}
