//! # Service Error Type
//!
//! What callers of the `Shop` service see.
//!
//! Domain and persistence errors pass through transparently - their
//! messages already carry the context (product name, quantities, schema
//! version). Advisory failures never appear here: the advisory methods
//! return fallback text instead of an error.

use thiserror::Error;

use kelontong_core::CoreError;
use kelontong_store::StoreError;

/// Errors surfaced by `Shop` operations.
#[derive(Debug, Error)]
pub enum ShopError {
    /// A business rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Loading persisted state failed.
    ///
    /// Save failures are not surfaced this way; they are logged as
    /// warnings and in-memory state stays committed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for shop operations.
pub type ShopResult<T> = Result<T, ShopError>;
