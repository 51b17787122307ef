//! # Starter Dataset
//!
//! The default catalog used on first launch, before any blob has been
//! saved. Mirrors a typical toko kelontong shelf; one product starts below
//! the low-stock threshold so the dashboard alert path is visible from day
//! one.

use uuid::Uuid;

use kelontong_core::{Money, Product};

/// Builds the starter catalog. Ids are freshly generated on every call.
pub fn starter_catalog() -> Vec<Product> {
    let entry = |name: &str, category: &str, price: i64, cost: i64, stock: i64, unit: &str| {
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price: Money::new(price),
            cost: Money::new(cost),
            stock,
            unit: unit.to_string(),
        }
    };

    vec![
        entry("Beras Premium 5kg", "Sembako", 65_000, 58_000, 20, "sak"),
        entry("Minyak Goreng 1L", "Sembako", 16_000, 14_000, 45, "btl"),
        entry("Telur Ayam 1kg", "Sembako", 28_000, 25_000, 15, "kg"),
        entry("Gula Pasir 1kg", "Sembako", 14_500, 12_500, 30, "bks"),
        entry("Indomie Goreng", "Makanan", 3_500, 2_900, 100, "bks"),
        entry("Kopi Kapal Api", "Minuman", 1_500, 1_100, 8, "sachet"),
        entry("Sabun Mandi Cair", "Kebersihan", 22_000, 18_000, 12, "btl"),
    ]
}
