//! # Advisor Configuration
//!
//! Endpoint, model and timeout settings, resolved from the environment
//! with sensible defaults.

use std::time::Duration;

use crate::error::AdvisorError;

/// Environment variable carrying the API key.
pub const API_KEY_ENV: &str = "KELONTONG_AI_API_KEY";

/// Legacy/compatible API key variable, consulted when the primary one is
/// unset.
pub const API_KEY_FALLBACK_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "KELONTONG_AI_MODEL";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "KELONTONG_AI_BASE_URL";

/// Environment variable overriding the request timeout (seconds).
pub const TIMEOUT_ENV: &str = "KELONTONG_AI_TIMEOUT_SECS";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default endpoint base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request timeout. Every advisory call is bounded; a timeout
/// takes the same fallback path as any other adapter failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Advisor client configuration.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl AdvisorConfig {
    /// Creates a config with the given API key and all defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        AdvisorConfig {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolves the config from the environment.
    ///
    /// ## Errors
    /// `MissingApiKey` when neither key variable is set.
    pub fn from_env() -> Result<Self, AdvisorError> {
        let api_key = std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_FALLBACK_ENV))
            .map_err(|_| AdvisorError::MissingApiKey(API_KEY_ENV))?;

        let mut config = AdvisorConfig::new(api_key);

        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Ok(secs) = std::env::var(TIMEOUT_ENV) {
            if let Ok(secs) = secs.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
