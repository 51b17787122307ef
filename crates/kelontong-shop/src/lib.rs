//! # kelontong-shop: Orchestration Layer
//!
//! The service layer of KelontongPOS. One [`Shop`] value is the single
//! operator session: it owns the catalog, the ledger and the active cart,
//! and every user-facing operation goes through it.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  user action                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shop operation (add_product, add_to_cart, checkout, ...)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kelontong-core aggregate mutation (validated, all-or-nothing)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  snapshot save via kelontong-store (failure = warning, state kept)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  caller re-reads derived state (summary is recomputed, never cached)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`shop`] - the `Shop` service
//! - [`seed`] - the starter dataset used when no catalog blob exists yet
//! - [`telemetry`] - tracing bootstrap for embedders
//! - [`error`] - service error type

pub mod error;
pub mod seed;
pub mod shop;
pub mod telemetry;

pub use error::{ShopError, ShopResult};
pub use shop::Shop;
