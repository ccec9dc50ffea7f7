//! Database connection management and SeaORM repositories.

mod connection;
pub mod entity;
mod postgres_base;
mod postgres_repo;

pub use connection::{DatabaseConfig, connect};
pub use postgres_base::PostgresBaseRepository;
pub use postgres_repo::{
    PostgresFollowRepository, PostgresNotificationRepository, PostgresPostRepository,
    PostgresProfileRepository,
};

#[cfg(test)]
mod tests;
