//! # Financial Aggregator
//!
//! Derives the financial summary from the transaction log.
//!
//! The summary is a pure function of the log: it is recomputed on every
//! read and never stored as independent mutable state, so the figures can
//! never drift from the ledger they describe.
//!
//! ## Figures
//! ```text
//! revenue      = Σ SALE totals
//! cogs         = Σ over SALE line items of (cost × quantity)
//! gross profit = revenue − cogs
//! expenses     = Σ EXPENSE totals
//! net profit   = gross profit − expenses
//! ```
//!
//! RESTOCK transactions record stock replenishment spend for the history
//! view; they enter neither revenue nor expenses.

use serde::Serialize;

use crate::money::Money;
use crate::types::{Transaction, TransactionType};

// =============================================================================
// Financial Summary
// =============================================================================

/// Derived profit-and-loss figures over the full transaction log.
///
/// Derived only - never persisted, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Total SALE revenue (omzet).
    pub revenue: Money,
    /// Cost of goods sold across all SALE line items.
    pub cogs: Money,
    /// revenue − cogs.
    pub gross_profit: Money,
    /// Total operational EXPENSE amount.
    pub expenses: Money,
    /// gross_profit − expenses.
    pub net_profit: Money,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes the financial summary in a single pass over the log.
///
/// Pure and deterministic; O(n) in the number of transactions plus their
/// line items.
pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
    let mut revenue = Money::zero();
    let mut cogs = Money::zero();
    let mut expenses = Money::zero();

    for tx in transactions {
        match tx.kind {
            TransactionType::Sale => {
                revenue += tx.total;
                cogs += tx.line_cost_total();
            }
            TransactionType::Expense => {
                expenses += tx.total;
            }
            TransactionType::Restock => {}
        }
    }

    let gross_profit = revenue - cogs;
    FinancialSummary {
        revenue,
        cogs,
        gross_profit,
        expenses,
        net_profit: gross_profit - expenses,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SaleLine;

    fn sale(total: i64, lines: Vec<(i64, i64)>) -> Transaction {
        // lines: (cost, quantity)
        Transaction {
            id: "s".to_string(),
            date: "2024-03-01T08:30:00Z".parse().unwrap(),
            kind: TransactionType::Sale,
            total: Money::new(total),
            items: Some(
                lines
                    .into_iter()
                    .map(|(cost, quantity)| SaleLine {
                        product_id: "p".to_string(),
                        name: "Item".to_string(),
                        quantity,
                        price: Money::new(cost + 500),
                        cost: Money::new(cost),
                    })
                    .collect(),
            ),
            note: None,
        }
    }

    fn expense(total: i64) -> Transaction {
        Transaction {
            id: "e".to_string(),
            date: "2024-03-01T09:00:00Z".parse().unwrap(),
            kind: TransactionType::Expense,
            total: Money::new(total),
            items: None,
            note: Some("Listrik".to_string()),
        }
    }

    fn restock(total: i64) -> Transaction {
        Transaction {
            id: "r".to_string(),
            date: "2024-03-01T10:00:00Z".parse().unwrap(),
            kind: TransactionType::Restock,
            items: None,
            note: Some("Restock".to_string()),
            total: Money::new(total),
        }
    }

    #[test]
    fn test_empty_log() {
        let summary = summarize(&[]);
        assert_eq!(summary.revenue, Money::zero());
        assert_eq!(summary.cogs, Money::zero());
        assert_eq!(summary.gross_profit, Money::zero());
        assert_eq!(summary.expenses, Money::zero());
        assert_eq!(summary.net_profit, Money::zero());
    }

    #[test]
    fn test_summary_figures() {
        let log = vec![
            sale(65_000, vec![(58_000, 1)]),
            sale(7_000, vec![(2_900, 2)]),
            expense(10_000),
            restock(29_000),
        ];
        let summary = summarize(&log);

        assert_eq!(summary.revenue, Money::new(72_000));
        assert_eq!(summary.cogs, Money::new(63_800));
        assert_eq!(summary.gross_profit, Money::new(8_200));
        assert_eq!(summary.expenses, Money::new(10_000));
        // A net loss is representable
        assert_eq!(summary.net_profit, Money::new(-1_800));
    }

    #[test]
    fn test_profit_identities() {
        let log = vec![
            sale(100_000, vec![(20_000, 3)]),
            sale(45_000, vec![(14_000, 2), (2_900, 4)]),
            expense(25_000),
            expense(8_000),
            restock(100_000),
        ];
        let s = summarize(&log);

        assert_eq!(s.gross_profit, s.revenue - s.cogs);
        assert_eq!(s.net_profit, s.gross_profit - s.expenses);
    }

    #[test]
    fn test_restock_is_neutral() {
        let with = summarize(&[sale(10_000, vec![(8_000, 1)]), restock(500_000)]);
        let without = summarize(&[sale(10_000, vec![(8_000, 1)])]);
        assert_eq!(with, without);
    }
}
