//! # Blob Store Contract
//!
//! The persistence contract consumed by the shop layer: opaque blobs keyed
//! by name. The shop saves after every mutation and never awaits an
//! acknowledgment beyond the synchronous result.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreResult;

// =============================================================================
// BlobStore Trait
// =============================================================================

/// A named-blob store.
///
/// Keys are short bare names (`"products"`, `"transactions"`), not paths.
pub trait BlobStore {
    /// Loads the blob for a key. `Ok(None)` means the key has never been
    /// saved - callers fall back to a default dataset.
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Saves the blob for a key, replacing any previous value.
    fn save(&self, key: &str, blob: &[u8]) -> StoreResult<()>;
}

/// A store reference is itself a store; lets a shop borrow a store that
/// outlives it.
impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &[u8]) -> StoreResult<()> {
        (**self).save(key, blob)
    }
}

impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &[u8]) -> StoreResult<()> {
        (**self).save(key, blob)
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// HashMap-backed store. Used in tests and anywhere persistence across
/// process restarts is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let blobs = self.blobs.lock().expect("blob map mutex poisoned");
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &[u8]) -> StoreResult<()> {
        let mut blobs = self.blobs.lock().expect("blob map mutex poisoned");
        blobs.insert(key.to_string(), blob.to_vec());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
