//! In-memory repository implementations.
//!
//! Used as the fallback when `DATABASE_URL` is not configured, and by
//! service-level tests. Data is lost on process restart; listing methods keep
//! the same newest-first ordering contract as the PostgreSQL repositories.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Follow, FollowStatus, Notification, Post, Profile, Visibility};
use quill_core::error::RepoError;
use quill_core::ports::{
    BaseRepository, FollowRepository, NotificationRepository, PostRepository, ProfileRepository,
};

#[cfg(test)]
mod tests;

/// In-memory profile repository.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    store: RwLock<HashMap<Uuid, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Profile, Uuid> for InMemoryProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, profile: Profile) -> Result<Profile, RepoError> {
        let mut store = self.store.write().await;
        let duplicate = store.values().any(|p| {
            p.id != profile.id && (p.email == profile.email || p.username == profile.username)
        });
        if duplicate {
            return Err(RepoError::Constraint("entity already exists".to_string()));
        }
        store.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|p| p.username == username)
            .cloned())
    }
}

/// In-memory post repository.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store
            .values()
            .any(|p| p.id != post.id && p.slug == post.slug)
        {
            return Err(RepoError::Constraint("entity already exists".to_string()));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        Ok(self.store.read().await.values().any(|p| p.slug == slug))
    }

    async fn list_published_public(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self
            .store
            .read()
            .await
            .values()
            .filter(|p| p.published && p.visibility == Visibility::Public)
            .cloned()
            .collect();
        newest_first(&mut posts);
        Ok(posts)
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self
            .store
            .read()
            .await
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        newest_first(&mut posts);
        Ok(posts)
    }
}

/// In-memory follow repository.
#[derive(Default)]
pub struct InMemoryFollowRepository {
    store: RwLock<HashMap<Uuid, Follow>>,
}

impl InMemoryFollowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Follow, Uuid> for InMemoryFollowRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Follow>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, follow: Follow) -> Result<Follow, RepoError> {
        let mut store = self.store.write().await;
        let duplicate = store.values().any(|f| {
            f.id != follow.id
                && f.follower_id == follow.follower_id
                && f.followee_id == follow.followee_id
        });
        if duplicate {
            return Err(RepoError::Constraint("entity already exists".to_string()));
        }
        store.insert(follow.id, follow.clone());
        Ok(follow)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn find_pair(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<Option<Follow>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|f| f.follower_id == follower_id && f.followee_id == followee_id)
            .cloned())
    }

    async fn list_accepted_followers(&self, followee_id: Uuid) -> Result<Vec<Follow>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .filter(|f| f.followee_id == followee_id && f.status == FollowStatus::Accepted)
            .cloned()
            .collect())
    }

    async fn list_accepted_following(&self, follower_id: Uuid) -> Result<Vec<Follow>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .filter(|f| f.follower_id == follower_id && f.status == FollowStatus::Accepted)
            .cloned()
            .collect())
    }
}

/// In-memory notification repository.
#[derive(Default)]
pub struct InMemoryNotificationRepository {
    store: RwLock<HashMap<Uuid, Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Notification, Uuid> for InMemoryNotificationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, notification: Notification) -> Result<Notification, RepoError> {
        self.store
            .write()
            .await
            .insert(notification.id, notification.clone());
        Ok(notification)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn list_for_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>, RepoError> {
        let mut notifications: Vec<Notification> = self
            .store
            .read()
            .await
            .values()
            .filter(|n| n.recipient_id == recipient_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    async fn count_unread(&self, recipient_id: Uuid) -> Result<u64, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .filter(|n| n.recipient_id == recipient_id && !n.read)
            .count() as u64)
    }

    async fn mark_all_read(&self, recipient_id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        for notification in store.values_mut() {
            if notification.recipient_id == recipient_id {
                notification.read = true;
            }
        }
        Ok(())
    }
}
