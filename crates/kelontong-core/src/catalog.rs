//! # Product Catalog
//!
//! The owned aggregate for the product collection.
//!
//! ## Mutation Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog                                         │
//! │                                                                         │
//! │  Inventory form ──► add(product)            catalog grows by one        │
//! │  Inventory form ──► update(id, patch)       all-or-nothing replace      │
//! │  Inventory form ──► remove(id)              no-op when absent           │
//! │  Checkout ────────► adjust_stock(id, -qty)  rejected below zero         │
//! │  Restock ─────────► adjust_stock(id, +qty)                              │
//! │                                                                         │
//! │  Insertion order is preserved and survives persistence round-trips.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edits are expressed through [`ProductPatch`], an explicit list of the
//! mutable fields; the patched record is validated before commit.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{
    validate_amount, validate_category, validate_product_name, validate_stock_level, validate_unit,
};

// =============================================================================
// Product Draft
// =============================================================================

/// Caller-supplied fields for a new product. The catalog id is assigned by
/// the orchestration layer, not by the caller's form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub cost: Money,
    pub stock: i64,
    pub unit: String,
}

impl ProductDraft {
    /// Builds the full record from this draft and a freshly assigned id.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            cost: self.cost,
            stock: self.stock,
            unit: self.unit,
        }
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// An explicit edit to an existing product.
///
/// Lists exactly the mutable fields; `None` leaves a field unchanged. The
/// id is not patchable. Applied and validated atomically by
/// [`Catalog::update`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Money>,
    pub cost: Option<Money>,
    pub stock: Option<i64>,
    pub unit: Option<String>,
}

impl ProductPatch {
    /// Produces the candidate record with this patch applied.
    fn apply(&self, current: &Product) -> Product {
        Product {
            id: current.id.clone(),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| current.category.clone()),
            price: self.price.unwrap_or(current.price),
            cost: self.cost.unwrap_or(current.cost),
            stock: self.stock.unwrap_or(current.stock),
            unit: self.unit.clone().unwrap_or_else(|| current.unit.clone()),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The product catalog aggregate.
///
/// ## Invariants
/// - Product ids are unique
/// - Every record passes field validation
/// - Stock is never negative
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Builds a catalog from persisted records, preserving their order.
    pub fn from_records(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The records in insertion order, for persistence and display.
    pub fn records(&self) -> &[Product] {
        &self.products
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// - `Ok(&Product)` - the stored record
    /// - `Err(Validation)` - a field failed validation
    /// - `Err(DuplicateId)` - the id is already in the catalog
    pub fn add(&mut self, product: Product) -> CoreResult<&Product> {
        validate_record(&product)?;

        if self.get(&product.id).is_some() {
            return Err(CoreError::DuplicateId(product.id));
        }

        self.products.push(product);
        Ok(self.products.last().expect("record was just pushed"))
    }

    /// Applies a patch to the product with the given id.
    ///
    /// The patched record is validated before commit; on any error the
    /// stored record is unchanged.
    ///
    /// ## Returns
    /// - `Ok(&Product)` - the updated record
    /// - `Err(ProductNotFound)` - no record with that id
    /// - `Err(Validation)` - the patched record failed validation
    pub fn update(&mut self, id: &str, patch: &ProductPatch) -> CoreResult<&Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        let candidate = patch.apply(&self.products[index]);
        validate_record(&candidate)?;

        self.products[index] = candidate;
        Ok(&self.products[index])
    }

    /// Removes the product with the given id.
    ///
    /// Returns the removed record, or `None` if the id was absent (removal
    /// of a missing product is a deliberate no-op).
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Adjusts a product's stock by a signed delta and returns the new
    /// level.
    ///
    /// A negative delta that would take stock below zero is rejected with
    /// `InsufficientStock` and leaves the level unchanged - over-selling is
    /// an error here, never a silent negative quantity.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> CoreResult<i64> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        let new_level = product.stock + delta;
        if new_level < 0 {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: -delta,
            });
        }

        product.stock = new_level;
        Ok(new_level)
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterates over all products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose stock is below the low-stock threshold.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }
}

/// Field validation shared by insert and patched-update paths.
fn validate_record(product: &Product) -> Result<(), ValidationError> {
    validate_product_name(&product.name)?;
    validate_category(&product.category)?;
    validate_unit(&product.unit)?;
    validate_amount("price", product.price)?;
    validate_amount("cost", product.cost)?;
    validate_stock_level(product.stock)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, name: &str, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "Sembako".to_string(),
            price: Money::new(16_000),
            cost: Money::new(14_000),
            stock,
            unit: "btl".to_string(),
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("1", "Minyak Goreng 1L", 45)).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("1").unwrap().name, "Minyak Goreng 1L");
        assert!(catalog.get("2").is_none());
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut catalog = Catalog::new();
        let err = catalog.add(test_product("1", "  ", 45)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("1", "Minyak Goreng 1L", 45)).unwrap();

        let err = catalog.add(test_product("1", "Gula Pasir 1kg", 30)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_update_applies_patch() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("1", "Minyak Goreng 1L", 45)).unwrap();

        let patch = ProductPatch {
            price: Some(Money::new(17_500)),
            stock: Some(40),
            ..ProductPatch::default()
        };
        let updated = catalog.update("1", &patch).unwrap();

        assert_eq!(updated.price, Money::new(17_500));
        assert_eq!(updated.stock, 40);
        // Unpatched fields retained
        assert_eq!(updated.name, "Minyak Goreng 1L");
        assert_eq!(updated.cost, Money::new(14_000));
    }

    #[test]
    fn test_update_missing_id_fails() {
        let mut catalog = Catalog::new();
        let err = catalog.update("ghost", &ProductPatch::default()).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("1", "Minyak Goreng 1L", 45)).unwrap();

        // Invalid price: the whole patch is rejected, including the name
        let patch = ProductPatch {
            name: Some("Renamed".to_string()),
            price: Some(Money::new(-1)),
            ..ProductPatch::default()
        };
        assert!(catalog.update("1", &patch).is_err());

        let stored = catalog.get("1").unwrap();
        assert_eq!(stored.name, "Minyak Goreng 1L");
        assert_eq!(stored.price, Money::new(16_000));
    }

    #[test]
    fn test_remove() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("1", "Minyak Goreng 1L", 45)).unwrap();

        let removed = catalog.remove("1").unwrap();
        assert_eq!(removed.id, "1");
        assert!(catalog.is_empty());

        // Absent id is a no-op
        assert!(catalog.remove("1").is_none());
    }

    #[test]
    fn test_adjust_stock() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("1", "Minyak Goreng 1L", 5)).unwrap();

        assert_eq!(catalog.adjust_stock("1", -2).unwrap(), 3);
        assert_eq!(catalog.adjust_stock("1", 10).unwrap(), 13);
        assert_eq!(catalog.get("1").unwrap().stock, 13);
    }

    #[test]
    fn test_adjust_stock_rejects_below_zero() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("1", "Minyak Goreng 1L", 3)).unwrap();

        let err = catalog.adjust_stock("1", -5).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                available,
                requested,
                ..
            } => {
                assert_eq!(available, 3);
                assert_eq!(requested, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
        // Level unchanged after rejection
        assert_eq!(catalog.get("1").unwrap().stock, 3);
    }

    #[test]
    fn test_low_stock() {
        let mut catalog = Catalog::new();
        catalog.add(test_product("1", "Kopi Kapal Api", 8)).unwrap();
        catalog.add(test_product("2", "Indomie Goreng", 100)).unwrap();
        catalog.add(test_product("3", "Telur Ayam 1kg", 9)).unwrap();
        catalog.add(test_product("4", "Gula Pasir 1kg", 10)).unwrap();

        let low: Vec<&str> = catalog.low_stock().iter().map(|p| p.id.as_str()).collect();
        // Threshold is strict: exactly 10 does not count as low
        assert_eq!(low, vec!["1", "3"]);
    }

    #[test]
    fn test_from_records_preserves_order() {
        let catalog = Catalog::from_records(vec![
            test_product("b", "Beras Premium 5kg", 20),
            test_product("a", "Gula Pasir 1kg", 30),
        ]);
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
