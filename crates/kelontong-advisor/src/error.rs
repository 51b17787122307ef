//! # Advisor Error Types
//!
//! Failures of the advisory adapter. None of these ever reaches a user:
//! the shop layer maps every variant to the fixed fallback text.

use thiserror::Error;

/// AI advisory call errors.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Transport-level failure (connection, timeout, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with an error status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The endpoint answered successfully but produced no usable text.
    #[error("Advisor returned an empty response")]
    EmptyResponse,

    /// No API key was configured.
    #[error("No advisor API key configured (set {0})")]
    MissingApiKey(&'static str),
}
