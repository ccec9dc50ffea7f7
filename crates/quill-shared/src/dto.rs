//! Data Transfer Objects - request/response types for the API.
//!
//! Enumerated fields (visibility, follow status, notification kind) travel as
//! snake_case strings and are parsed into the closed domain enums at the
//! handler boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Auth & profiles

/// Request to register a new author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// A profile's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

// ---------------------------------------------------------------------------
// Posts

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// One of `public`, `private`, `followers`.
    pub visibility: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

/// Partial post update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub visibility: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

/// Query parameters for the public listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
}

/// A post as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub visibility: String,
    pub published: bool,
    pub tags: Vec<String>,
    pub slug: String,
    pub author_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<ProfileResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Follows & notifications

/// Response to a follow request: accept or reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondFollowRequest {
    pub accept: bool,
}

/// A follow relationship as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A notification as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub kind: String,
    pub message: String,
    pub read: bool,
    pub related_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Derived unread-notification count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    pub count: u64,
}

// ---------------------------------------------------------------------------
// Assistant

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeasRequest {
    pub topic: String,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeasResponse {
    pub ideas: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImproveRequest {
    pub content: String,
    pub instruction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImproveResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoResponse {
    pub optimized_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
