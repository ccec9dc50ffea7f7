use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile entity - a registered author.
///
/// Created on registration, mutated only by its owner, never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with generated ID and timestamps.
    pub fn new(email: String, username: String, full_name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            full_name,
            avatar_url: None,
            bio: None,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
