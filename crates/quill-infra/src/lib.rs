//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`: SeaORM
//! repositories, in-memory repositories for DB-less operation and tests, the
//! upstream text-generation client, authentication services, and rate
//! limiting.

pub mod assistant;
pub mod auth;
pub mod database;
pub mod memory;
pub mod rate_limit;

pub use assistant::{GeminiClient, GeminiConfig, OfflineGenerator};
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, PostgresFollowRepository, PostgresNotificationRepository,
    PostgresPostRepository, PostgresProfileRepository, connect,
};
pub use memory::{
    InMemoryFollowRepository, InMemoryNotificationRepository, InMemoryPostRepository,
    InMemoryProfileRepository,
};
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
