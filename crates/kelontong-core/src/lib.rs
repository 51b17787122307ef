//! # kelontong-core: Pure Business Logic for KelontongPOS
//!
//! This crate is the heart of KelontongPOS. It contains all business logic
//! as pure functions and owned aggregates with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KelontongPOS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 kelontong-shop (Orchestration)                  │   │
//! │  │   add_product, add_to_cart, checkout, record_expense, restock   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kelontong-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────┐ ┌────────┐ ┌─────────┐      │   │
//! │  │   │ catalog │ │ ledger  │ │ cart │ │finance │ │  money  │      │   │
//! │  │   │ Product │ │Transact.│ │ Cart │ │summary │ │  Money  │      │   │
//! │  │   └─────────┘ └─────────┘ └──────┘ └────────┘ └─────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        kelontong-store (blob snapshots) / kelontong-advisor     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain record types (Product, Transaction, SaleLine)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Product catalog aggregate (inventory mutations)
//! - [`cart`] - Per-session shopping cart
//! - [`ledger`] - Append-only transaction log
//! - [`finance`] - Financial summary derivation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic - same input = same output
//! 2. **No I/O**: persistence, clock and id generation live in outer crates
//! 3. **Integer Money**: all monetary values are whole rupiah (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//! 5. **Owned Aggregates**: the two collections are mutated only through
//!    their aggregate's methods - no shared mutable state
//!
//! ## Example Usage
//!
//! ```rust
//! use kelontong_core::{finance, Money, Transaction};
//!
//! let transactions: Vec<Transaction> = Vec::new();
//! let summary = finance::summarize(&transactions);
//! assert_eq!(summary.net_profit, Money::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod finance;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, ProductDraft, ProductPatch};
pub use error::{CoreError, CoreResult, ValidationError};
pub use finance::FinancialSummary;
pub use ledger::Ledger;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level strictly below which a product counts as "low stock".
///
/// Used for dashboard alerts and the advisory prompt context.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
