//! # Advisor HTTP Client
//!
//! Client for a Gemini-style `generateContent` endpoint: a single prompt
//! string goes in, free-form text comes out.

use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;

/// Client for the AI advisory endpoint.
pub struct AdvisorClient {
    http: reqwest::Client,
    config: AdvisorConfig,
}

impl AdvisorClient {
    /// Creates a client with the request timeout from the config baked
    /// into the underlying HTTP client.
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(AdvisorClient { http, config })
    }

    /// Sends a prompt and returns the generated text.
    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!("sending advisory request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await?;

        if !status.is_success() {
            let message = response_body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("received advisory response");

        extract_text(&response_body)
    }
}

/// Pulls the generated text out of a `generateContent` response body,
/// concatenating the parts of the first candidate.
fn extract_text(body: &Value) -> Result<String, AdvisorError> {
    let text = body
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AdvisorError::EmptyResponse);
    }
    Ok(text)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Margins are thin. " },
                        { "text": "Raise the coffee price." }
                    ]
                }
            }]
        });
        assert_eq!(
            extract_text(&body).unwrap(),
            "Margins are thin. Raise the coffee price."
        );
    }

    #[test]
    fn test_extract_text_empty_body() {
        assert!(matches!(
            extract_text(&json!({})),
            Err(AdvisorError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(&json!({ "candidates": [] })),
            Err(AdvisorError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // Nothing listens on this port; the call must fail, not hang
        let mut config = AdvisorConfig::new("test-key");
        config.base_url = "http://127.0.0.1:9".to_string();
        config.timeout = std::time::Duration::from_secs(2);

        let client = AdvisorClient::new(config).unwrap();
        let result = client.generate("hello").await;
        assert!(matches!(result, Err(AdvisorError::Http(_))));
    }

    #[tokio::test]
    #[ignore = "requires KELONTONG_AI_API_KEY env var"]
    async fn test_live_api() {
        let config = AdvisorConfig::from_env().expect("advisor config");
        let client = AdvisorClient::new(config).unwrap();

        let text = client
            .generate("Say 'hello' and nothing else.")
            .await
            .unwrap();
        assert!(!text.is_empty());
    }
}
