//! # Error Types
//!
//! Domain-specific error types for kelontong-core.
//!
//! ## Error Hierarchy
//! ```text
//! kelontong-core errors (this file)
//! ├── CoreError        - Business rule violations
//! └── ValidationError  - Input validation failures
//!
//! kelontong-store errors (separate crate)
//! └── StoreError       - Persistence failures
//!
//! kelontong-shop errors (orchestration crate)
//! └── ShopError        - What callers of the service see
//!
//! Flow: ValidationError → CoreError → ShopError → caller
//! ```
//!
//! Errors are enum variants carrying context (product name, requested
//! quantity, etc.), never bare strings.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations. All of them affect financial
/// correctness and are surfaced loudly to the caller - nothing here is
/// silently swallowed.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Operation targets a product id that is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The requested quantity exceeds the available stock.
    ///
    /// Raised when adding to the cart and again at checkout, so a sale can
    /// never drive stock below zero.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A product id was inserted twice into the catalog.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// Cart operation targets a product id with no line in the cart.
    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    /// Cart has reached the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Checkout was attempted on an empty cart.
    ///
    /// The cart, catalog and ledger are untouched when this is returned.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any aggregate is mutated; a failed validation leaves
/// catalog, ledger and cart exactly as they were.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
