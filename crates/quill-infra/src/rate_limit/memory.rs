//! In-memory rate limiter using the governor crate.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};

use quill_core::ports::{RateLimitError, RateLimitResult, RateLimiter};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// In-memory rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 30,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.max_requests),
            window: Duration::from_secs(
                std::env::var("RATE_LIMIT_WINDOW_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(default.window.as_secs()),
            ),
        }
    }
}

/// In-memory rate limiter using the GCRA algorithm.
///
/// Limits are process-wide, not per-key: the guarded resource is the shared
/// upstream API quota, so one bucket for the whole process is what we want.
pub struct InMemoryRateLimiter {
    limiter: Arc<DirectRateLimiter>,
    config: RateLimitConfig,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let quota = Quota::with_period(config.window / config.max_requests)
            .expect("window and max_requests are non-zero")
            .allow_burst(NonZeroU32::new(config.max_requests).expect("non-zero max_requests"));

        let limiter = Arc::new(DirectRateLimiter::direct(quota));

        Self { limiter, config }
    }
}

impl RateLimiter for InMemoryRateLimiter {
    fn check(&self, _key: &str) -> Result<RateLimitResult, RateLimitError> {
        match self.limiter.check() {
            Ok(_) => Ok(RateLimitResult {
                allowed: true,
                remaining: self.config.max_requests, // Approximate
                reset_after: self.config.window,
            }),
            Err(not_until) => Ok(RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_after: not_until.wait_time_from(DefaultClock::default().now()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_is_allowed_then_limited() {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 2,
            window: Duration::from_secs(60),
        });

        assert!(limiter.check("k").unwrap().allowed);
        assert!(limiter.check("k").unwrap().allowed);

        let third = limiter.check("k").unwrap();
        assert!(!third.allowed);
        assert!(third.reset_after > Duration::ZERO);
    }
}
