//! Upstream text-generation port.

use async_trait::async_trait;

use crate::error::UpstreamError;

/// Abstraction over the external generative-language API.
///
/// One prompt in, one plain-text completion out. Stateless per call: identical
/// inputs re-issue identical upstream calls, and the assistant service holds
/// no shared mutable state, so implementations must be safe for unlimited
/// parallel invocation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}
