//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod assistant;
mod auth;
mod rate_limit;
mod repository;

pub use assistant::TextGenerator;
pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use repository::{
    BaseRepository, FollowRepository, NotificationRepository, PostRepository, ProfileRepository,
};
