//! Upstream text-generation implementations.

mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

use async_trait::async_trait;

use quill_core::error::UpstreamError;
use quill_core::ports::TextGenerator;

/// Generator used when no API key is configured.
///
/// Every call fails with `NotConfigured`, which the assistant service turns
/// into its deterministic fallback output, so the assistant endpoints stay
/// usable in a degraded mode.
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, UpstreamError> {
        Err(UpstreamError::NotConfigured)
    }
}
