//! # Validation Module
//!
//! Input validation for catalog and ledger mutations.
//!
//! Every mutating operation validates its input before touching an
//! aggregate, so a rejected call leaves all state unchanged.
//!
//! ## Usage
//! ```rust
//! use kelontong_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("Beras Premium 5kg").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (whitespace-only counts as empty)
/// - Must be at most 200 characters
///
/// An empty name is rejected rather than defaulted; the catalog never
/// invents placeholder names.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a category label. May be empty; bounded length only.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a unit label. May be empty; bounded length only.
pub fn validate_unit(unit: &str) -> ValidationResult<()> {
    if unit.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "unit".to_string(),
            max: 20,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price or cost amount.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: giveaway items exist)
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (stock never goes below zero in this system)
pub fn validate_stock_level(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a sale or restock quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates an expense amount.
///
/// ## Rules
/// - Must be positive (> 0); a zero-rupiah expense is meaningless
pub fn validate_expense_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Minyak Goreng 1L").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_labels() {
        assert!(validate_category("Sembako").is_ok());
        assert!(validate_category("").is_ok());
        assert!(validate_category(&"A".repeat(101)).is_err());

        assert!(validate_unit("btl").is_ok());
        assert!(validate_unit(&"A".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("price", Money::new(0)).is_ok());
        assert!(validate_amount("price", Money::new(16_000)).is_ok());
        assert!(validate_amount("price", Money::new(-100)).is_err());
    }

    #[test]
    fn test_validate_stock_level() {
        assert!(validate_stock_level(0).is_ok());
        assert!(validate_stock_level(45).is_ok());
        assert!(validate_stock_level(-1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_expense_amount() {
        assert!(validate_expense_amount(Money::new(50_000)).is_ok());
        assert!(validate_expense_amount(Money::zero()).is_err());
        assert!(validate_expense_amount(Money::new(-1)).is_err());
    }
}
