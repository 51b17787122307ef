//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! std::io::Error / serde_json::Error
//!      │
//!      ▼
//! StoreError (this module) ← adds schema-version categorization
//!      │
//!      ▼
//! kelontong-shop: load failures propagate; save failures after a
//! mutation become a non-fatal warning (in-memory state is already
//! committed)
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a blob failed (missing directory, permissions,
    /// disk full, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A blob could not be encoded or decoded as JSON.
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// A blob was written by an unknown (newer) schema version.
    #[error("Unsupported snapshot schema version {found} (supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
