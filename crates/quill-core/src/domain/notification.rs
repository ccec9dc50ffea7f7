use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// What triggered a notification.
///
/// Closed set so every consumer handles all cases at compile time.
/// `PostLike` and `Comment` are part of the data model; no operation in this
/// service emits them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    FollowRequest,
    NewPost,
    PostLike,
    Comment,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::FollowRequest => "follow_request",
            NotificationKind::NewPost => "new_post",
            NotificationKind::PostLike => "post_like",
            NotificationKind::Comment => "comment",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "follow_request" => Ok(NotificationKind::FollowRequest),
            "new_post" => Ok(NotificationKind::NewPost),
            "post_like" => Ok(NotificationKind::PostLike),
            "comment" => Ok(NotificationKind::Comment),
            other => Err(format!("unknown notification kind '{other}'")),
        }
    }
}

/// Notification entity.
///
/// Created by the system when a triggering event occurs; the recipient may
/// only mark it read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub related_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread notification.
    pub fn new(
        recipient_id: Uuid,
        kind: NotificationKind,
        message: String,
        related_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_id,
            kind,
            message,
            read: false,
            related_id,
            created_at: Utc::now(),
        }
    }
}
