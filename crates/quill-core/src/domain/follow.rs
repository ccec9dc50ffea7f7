use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle state of a follow request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowStatus {
    Pending,
    Accepted,
    Rejected,
}

impl FollowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowStatus::Pending => "pending",
            FollowStatus::Accepted => "accepted",
            FollowStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for FollowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FollowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FollowStatus::Pending),
            "accepted" => Ok(FollowStatus::Accepted),
            "rejected" => Ok(FollowStatus::Rejected),
            other => Err(format!("unknown follow status '{other}'")),
        }
    }
}

/// Follow relationship entity.
///
/// At most one relationship exists per (follower, followee) pair. Only an
/// `Accepted` relationship grants access to followers-only posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub status: FollowStatus,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new pending follow request.
    pub fn new(follower_id: Uuid, followee_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            follower_id,
            followee_id,
            status: FollowStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
