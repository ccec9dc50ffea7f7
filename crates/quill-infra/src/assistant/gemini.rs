//! HTTP client for the generative-language API.
//!
//! One endpoint, one shape: POST a prompt wrapped in
//! `{"contents":[{"parts":[{"text": ...}]}]}` and read
//! `candidates[0].content.parts[0].text` back. Any non-2xx status, transport
//! error, or missing field is an `UpstreamError` for the caller to degrade on.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use quill_core::error::UpstreamError;
use quill_core::ports::TextGenerator;

const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Upstream API configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Build from environment. Returns `None` without `ASSISTANT_API_KEY`;
    /// callers fall back to the offline generator.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("ASSISTANT_API_KEY").ok()?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("ASSISTANT_API_URL") {
            config.api_url = url;
        }
        if let Some(secs) = std::env::var("ASSISTANT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Some(config)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    text: Option<String>,
}

/// Pull the first candidate's text out of a response, or fail on shape.
fn extract_text(response: GenerateResponse) -> Result<String, UpstreamError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(UpstreamError::MalformedResponse)
}

/// Client for the generative-text endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Upstream returned non-success");
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|_| UpstreamError::MalformedResponse)?;

        extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn extracts_first_candidate_text() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "generated"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(extract_text(response).unwrap(), "generated");
    }

    #[test]
    fn missing_fields_are_malformed() {
        let empty: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(matches!(
            extract_text(empty),
            Err(UpstreamError::MalformedResponse)
        ));

        let no_parts: GenerateResponse =
            serde_json::from_value(serde_json::json!({"candidates": [{"content": {}}]})).unwrap();
        assert!(matches!(
            extract_text(no_parts),
            Err(UpstreamError::MalformedResponse)
        ));
    }
}
