//! # kelontong-store: Persistence Layer for KelontongPOS
//!
//! This crate provides blob persistence for the two collections (product
//! catalog, transaction ledger).
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     KelontongPOS Persistence                            │
//! │                                                                         │
//! │  Shop mutation (add_product, checkout, ...)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kelontong-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐   │   │
//! │  │   │   BlobStore   │    │   snapshot     │    │  FileStore   │   │   │
//! │  │   │   (blob.rs)   │    │ (envelopes +   │    │  MemoryStore │   │   │
//! │  │   │ load / save   │◄───│ schemaVersion) │    │              │   │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data dir>/products.json, <data dir>/transactions.json                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`blob`] - `BlobStore` contract and the in-memory implementation
//! - [`file`] - JSON-file-backed store with platform data-dir resolution
//! - [`snapshot`] - versioned envelopes and load/save helpers
//! - [`error`] - store error types
//!
//! ## Usage
//!
//! ```rust
//! use kelontong_store::{snapshot, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let catalog = snapshot::load_catalog_or(&store, Vec::new())?;
//! snapshot::save_catalog(&store, &catalog)?;
//! # Ok::<(), kelontong_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod blob;
pub mod error;
pub mod file;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use blob::{BlobStore, MemoryStore};
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
