//! # Snapshot Envelopes
//!
//! Serialized form of the two collections. Each blob is a JSON envelope
//! carrying an explicit schema version ahead of the records:
//!
//! ```json
//! { "schemaVersion": 1, "records": [ ... ] }
//! ```
//!
//! The version field exists so a future format change can migrate old
//! blobs instead of misreading them; decoding a version newer than this
//! build supports fails with `UnsupportedSchema`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kelontong_core::{Catalog, Ledger, Product, Transaction};

use crate::blob::BlobStore;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Keys & Version
// =============================================================================

/// Blob key for the product catalog.
pub const PRODUCTS_KEY: &str = "products";

/// Blob key for the transaction ledger.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Current snapshot schema version.
pub const SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Envelope
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<T> {
    schema_version: u32,
    records: Vec<T>,
}

fn encode<T: Serialize>(records: &[T]) -> StoreResult<Vec<u8>>
where
    T: Clone,
{
    let snapshot = Snapshot {
        schema_version: SCHEMA_VERSION,
        records: records.to_vec(),
    };
    Ok(serde_json::to_vec(&snapshot)?)
}

fn decode<T: DeserializeOwned>(blob: &[u8]) -> StoreResult<Vec<T>> {
    let snapshot: Snapshot<T> = serde_json::from_slice(blob)?;
    if snapshot.schema_version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchema {
            found: snapshot.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(snapshot.records)
}

// =============================================================================
// Catalog & Ledger Helpers
// =============================================================================

/// Loads the catalog, falling back to the supplied default dataset when no
/// blob has been saved yet.
pub fn load_catalog_or(store: &impl BlobStore, default: Vec<Product>) -> StoreResult<Catalog> {
    match store.load(PRODUCTS_KEY)? {
        Some(blob) => {
            let records: Vec<Product> = decode(&blob)?;
            debug!(count = records.len(), "catalog loaded");
            Ok(Catalog::from_records(records))
        }
        None => {
            debug!(count = default.len(), "no catalog blob, using default dataset");
            Ok(Catalog::from_records(default))
        }
    }
}

/// Saves the full catalog.
pub fn save_catalog(store: &impl BlobStore, catalog: &Catalog) -> StoreResult<()> {
    store.save(PRODUCTS_KEY, &encode(catalog.records())?)
}

/// Loads the ledger; an absent blob yields an empty ledger.
pub fn load_ledger(store: &impl BlobStore) -> StoreResult<Ledger> {
    match store.load(TRANSACTIONS_KEY)? {
        Some(blob) => {
            let records: Vec<Transaction> = decode(&blob)?;
            debug!(count = records.len(), "ledger loaded");
            Ok(Ledger::from_records(records))
        }
        None => Ok(Ledger::new()),
    }
}

/// Saves the full ledger.
pub fn save_ledger(store: &impl BlobStore, ledger: &Ledger) -> StoreResult<()> {
    store.save(TRANSACTIONS_KEY, &encode(ledger.all())?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use kelontong_core::{Money, SaleLine, TransactionType};

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Beras Premium 5kg".to_string(),
            category: "Sembako".to_string(),
            price: Money::new(65_000),
            cost: Money::new(58_000),
            stock: 20,
            unit: "sak".to_string(),
        }
    }

    fn test_sale() -> Transaction {
        Transaction {
            id: "tx-1".to_string(),
            date: "2024-03-01T08:30:00Z".parse().unwrap(),
            kind: TransactionType::Sale,
            total: Money::new(65_000),
            items: Some(vec![SaleLine {
                product_id: "p-1".to_string(),
                name: "Beras Premium 5kg".to_string(),
                quantity: 1,
                price: Money::new(65_000),
                cost: Money::new(58_000),
            }]),
            note: None,
        }
    }

    #[test]
    fn test_catalog_round_trip() {
        let store = MemoryStore::new();
        let catalog = Catalog::from_records(vec![test_product("a"), test_product("b")]);

        save_catalog(&store, &catalog).unwrap();
        let loaded = load_catalog_or(&store, Vec::new()).unwrap();

        assert_eq!(loaded.records(), catalog.records());
    }

    #[test]
    fn test_ledger_round_trip() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::new();
        ledger.record(test_sale());

        save_ledger(&store, &ledger).unwrap();
        let loaded = load_ledger(&store).unwrap();

        assert_eq!(loaded.all(), ledger.all());
    }

    #[test]
    fn test_missing_catalog_uses_default() {
        let store = MemoryStore::new();
        let loaded = load_catalog_or(&store, vec![test_product("seed")]).unwrap();

        assert_eq!(loaded.len(), 1);
        assert!(loaded.get("seed").is_some());

        // The default dataset is a fallback, not an implicit save
        assert_eq!(store.load(PRODUCTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_missing_ledger_is_empty() {
        let store = MemoryStore::new();
        assert!(load_ledger(&store).unwrap().is_empty());
    }

    #[test]
    fn test_envelope_carries_schema_version() {
        let store = MemoryStore::new();
        save_catalog(&store, &Catalog::new()).unwrap();

        let blob = store.load(PRODUCTS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&blob).unwrap();
        assert_eq!(value["schemaVersion"], SCHEMA_VERSION);
        assert!(value["records"].is_array());
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let store = MemoryStore::new();
        store
            .save(PRODUCTS_KEY, br#"{"schemaVersion":99,"records":[]}"#)
            .unwrap();

        let err = load_catalog_or(&store, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedSchema { found: 99, .. }
        ));
    }
}
