//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures surfaced to callers.
///
/// Store operations surface these directly. Assistant operations only ever
/// produce `Validation` (empty input rejected before any upstream call);
/// upstream failures are converted to fallback output internally.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Referenced entity is absent, or deliberately indistinguishable from
    /// "access denied" for hidden posts.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Acting user does not own the resource.
    #[error("Not authorized to modify this resource")]
    Forbidden,

    /// Duplicate relationship or unique-field collision.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound { entity: "resource" },
            RepoError::Constraint(msg) => DomainError::Conflict(msg),
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg),
        }
    }
}

/// Failures of the upstream text-generation call.
///
/// Always caught inside the assistant service and converted to the fallback
/// output; never propagated to callers.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Malformed upstream response")]
    MalformedResponse,

    #[error("No upstream endpoint configured")]
    NotConfigured,
}
