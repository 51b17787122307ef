//! # Domain Types
//!
//! Core record types used throughout KelontongPOS.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐
//! │    Product      │   │   Transaction    │   │    SaleLine     │
//! │  ─────────────  │   │  ──────────────  │   │  ─────────────  │
//! │  id (UUID)      │   │  id (UUID)       │   │  product_id     │
//! │  name           │   │  date (ISO)      │   │  name (frozen)  │
//! │  category       │   │  kind (type tag) │   │  quantity       │
//! │  price / cost   │   │  total           │   │  price (frozen) │
//! │  stock, unit    │   │  items? / note?  │   │  cost (frozen)  │
//! └─────────────────┘   └──────────────────┘   └─────────────────┘
//! ```
//!
//! `SaleLine.product_id` references `Product.id` by value only - a weak
//! relation for lookup and display. Deleting a product never invalidates
//! historical transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Owned exclusively by the [`Catalog`](crate::catalog::Catalog); all
/// mutation goes through the catalog's methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4), stable across edits.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text category label (e.g. "Sembako").
    pub category: String,

    /// Selling price. Non-negative.
    pub price: Money,

    /// Acquisition cost (HPP). Non-negative; expected <= price but not
    /// enforced (selling at a loss is a legitimate business decision).
    pub cost: Money,

    /// Units in stock. Never negative.
    pub stock: i64,

    /// Unit label shown next to quantities (e.g. "sak", "btl", "pcs").
    pub unit: String,
}

impl Product {
    /// Margin per unit at current prices.
    #[inline]
    pub fn margin(&self) -> Money {
        self.price - self.cost
    }

    /// Whether the remaining stock is below the low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Transaction Type
// =============================================================================

/// The kind of a ledger transaction.
///
/// The stored total is always a non-negative magnitude; its financial sign
/// is implied by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// A completed checkout. Carries line items.
    Sale,
    /// An operational expense. Carries a note.
    Expense,
    /// A stock replenishment. Carries a note.
    Restock,
}

impl TransactionType {
    /// The wire tag for this type ("SALE", "EXPENSE", "RESTOCK").
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "SALE",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Restock => "RESTOCK",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Sale Line
// =============================================================================

/// A line item in a SALE transaction.
///
/// Uses the snapshot pattern: name, price and cost are frozen at the time
/// of sale, so historical margin stays stable even if the catalog record
/// is edited or deleted later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    /// Product id at time of sale (weak reference).
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub name: String,
    /// Quantity sold.
    pub quantity: i64,
    /// Unit selling price at time of sale (frozen).
    pub price: Money,
    /// Unit acquisition cost at time of sale (frozen).
    pub cost: Money,
}

impl SaleLine {
    /// Line revenue (price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// Line cost of goods (cost × quantity).
    #[inline]
    pub fn line_cost(&self) -> Money {
        self.cost * self.quantity
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A record in the append-only transaction log.
///
/// Once recorded, a transaction is immutable history: catalog price edits
/// never retroactively alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the transaction was recorded (ISO instant on the wire).
    pub date: DateTime<Utc>,

    /// Transaction kind. Serialized under the `type` key.
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Total amount as a non-negative magnitude; sign implied by `kind`.
    pub total: Money,

    /// Line item snapshots. Present only for SALE transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SaleLine>>,

    /// Free-text note. Present for EXPENSE and RESTOCK transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Sum of cost × quantity across line items (zero when there are none).
    pub fn line_cost_total(&self) -> Money {
        self.items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(SaleLine::line_cost)
            .sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
