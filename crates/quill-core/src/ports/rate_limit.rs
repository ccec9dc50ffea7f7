//! Rate limiting port.

use std::time::Duration;

/// Rate limiter trait - abstraction over rate limiting backends.
///
/// The check is synchronous: the in-process GCRA limiter decides without any
/// I/O, which keeps the middleware free of executor tricks.
pub trait RateLimiter: Send + Sync {
    /// Check whether a request is allowed and update the counter.
    fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError>;
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_after: Duration,
}

/// Rate limit errors.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),
}
