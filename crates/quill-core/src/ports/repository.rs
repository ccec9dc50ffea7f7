use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Follow, Notification, Post, Profile};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Profile repository with lookup by the unique columns.
#[async_trait]
pub trait ProfileRepository: BaseRepository<Profile, Uuid> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, RepoError>;
}

/// Post repository.
///
/// Listing methods return rows ordered newest-first; visibility filtering is
/// the content service's responsibility, not the repository's.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepoError>;

    /// All published, public posts, newest first.
    async fn list_published_public(&self) -> Result<Vec<Post>, RepoError>;

    /// All posts by one author regardless of state, newest first.
    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;
}

/// Follow-relationship repository.
#[async_trait]
pub trait FollowRepository: BaseRepository<Follow, Uuid> {
    /// The unique relationship for a (follower, followee) pair, if any.
    async fn find_pair(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<Option<Follow>, RepoError>;

    /// Accepted relationships pointing at this followee.
    async fn list_accepted_followers(&self, followee_id: Uuid) -> Result<Vec<Follow>, RepoError>;

    /// Accepted relationships originating from this follower.
    async fn list_accepted_following(&self, follower_id: Uuid) -> Result<Vec<Follow>, RepoError>;
}

/// Notification repository.
#[async_trait]
pub trait NotificationRepository: BaseRepository<Notification, Uuid> {
    /// All notifications for a recipient, newest first.
    async fn list_for_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>, RepoError>;

    async fn count_unread(&self, recipient_id: Uuid) -> Result<u64, RepoError>;

    /// Mark every unread notification for a recipient as read.
    async fn mark_all_read(&self, recipient_id: Uuid) -> Result<(), RepoError>;
}
