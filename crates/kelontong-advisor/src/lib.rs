//! # kelontong-advisor: AI Advisory Adapter
//!
//! Outbound adapter for the AI accounting advisor: a prompt-in/text-out
//! collaborator reached over HTTP.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shop (business_health / chat)                                          │
//! │       │ builds prompt from a state snapshot, then awaits                │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                kelontong-advisor (THIS CRATE)                   │   │
//! │  │   prompt.rs ──► AdvisorClient::generate ──► generateContent     │   │
//! │  │                 (bounded timeout)            endpoint           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │ Ok(text)            │ Err(AdvisorError)                        │
//! │       ▼                     ▼                                          │
//! │  displayed verbatim    shop substitutes the fixed fallback text        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Responses are opaque free text; there is no structured format.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::AdvisorClient;
pub use config::AdvisorConfig;
pub use error::AdvisorError;

/// Fallback text shown when a health analysis request fails.
pub const ANALYSIS_UNAVAILABLE: &str =
    "The business advisor could not be reached. Check the AI API key and try again.";

/// Fallback text shown when a chat request fails.
pub const CHAT_UNAVAILABLE: &str =
    "Sorry, the advisor is busy right now. Please try again in a moment.";
