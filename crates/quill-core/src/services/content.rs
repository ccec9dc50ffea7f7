//! Content service - CRUD over posts with enforced visibility and slug
//! invariants.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{FollowStatus, Notification, NotificationKind, Post, Visibility};
use crate::error::DomainError;
use crate::ports::{
    BaseRepository, FollowRepository, NotificationRepository, PostRepository, ProfileRepository,
};
use crate::services::slug;

/// How many slug candidates to try before giving up. Suffixes are 8 hex
/// characters of a fresh UUID, so a second attempt is already rare.
const SLUG_ATTEMPTS: usize = 4;

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub visibility: Visibility,
    pub tags: Vec<String>,
    pub published: bool,
}

/// Partial update to a post. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub visibility: Option<Visibility>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

/// Filter for the public listing. Both criteria are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Case-insensitive substring match against title or summary.
    pub search: Option<String>,
    /// Restrict to posts whose tag sequence contains this tag.
    pub tag: Option<String>,
}

/// Decide whether `viewer` may read `post`.
///
/// The author always may. Everyone else only sees published posts, and then
/// only per visibility: public posts for anyone, followers-only posts when an
/// accepted follow exists, private posts never.
fn visible_to(post: &Post, viewer: Option<Uuid>, accepted_follower: bool) -> bool {
    if viewer == Some(post.author_id) {
        return true;
    }
    if !post.published {
        return false;
    }
    match post.visibility {
        Visibility::Public => true,
        Visibility::Private => false,
        Visibility::Followers => accepted_follower,
    }
}

/// CRUD over posts with the visibility and slug invariants enforced.
pub struct ContentService {
    posts: Arc<dyn PostRepository>,
    profiles: Arc<dyn ProfileRepository>,
    follows: Arc<dyn FollowRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl ContentService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        profiles: Arc<dyn ProfileRepository>,
        follows: Arc<dyn FollowRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            posts,
            profiles,
            follows,
            notifications,
        }
    }

    /// Create a post for `author_id`, deriving a globally unique slug.
    ///
    /// Publishing a non-private post notifies every accepted follower.
    pub async fn create_post(&self, author_id: Uuid, new: NewPost) -> Result<Post, DomainError> {
        let title = new.title.trim().to_string();
        let content = new.content;
        if title.is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        if content.trim().is_empty() {
            return Err(DomainError::validation("content must not be empty"));
        }

        let slug = self.unique_slug(&title).await?;
        let post = Post::new(
            author_id,
            title,
            content,
            new.summary,
            new.visibility,
            new.published,
            new.tags,
            slug,
        );

        let saved = self.posts.save(post).await?;
        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post created");

        if saved.published && saved.visibility != Visibility::Private {
            self.notify_followers(&saved).await?;
        }

        Ok(saved)
    }

    /// Apply a partial update. Only the author may modify a post; the slug is
    /// immutable after creation.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        update: PostUpdate,
    ) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::not_found("post"))?;

        if post.author_id != author_id {
            return Err(DomainError::Forbidden);
        }

        let was_published = post.published;

        if let Some(title) = update.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(DomainError::validation("title must not be empty"));
            }
            post.title = title;
        }
        if let Some(content) = update.content {
            if content.trim().is_empty() {
                return Err(DomainError::validation("content must not be empty"));
            }
            post.content = content;
        }
        if let Some(summary) = update.summary {
            post.summary = Some(summary);
        }
        if let Some(visibility) = update.visibility {
            post.visibility = visibility;
        }
        if let Some(tags) = update.tags {
            post.tags = tags;
        }
        if let Some(published) = update.published {
            post.published = published;
        }
        post.updated_at = Utc::now();

        let saved = self.posts.save(post).await?;

        // Fan out only on the draft -> live transition.
        if !was_published && saved.published && saved.visibility != Visibility::Private {
            self.notify_followers(&saved).await?;
        }

        Ok(saved)
    }

    /// Hard delete, author only.
    pub async fn delete_post(&self, post_id: Uuid, author_id: Uuid) -> Result<(), DomainError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::not_found("post"))?;

        if post.author_id != author_id {
            return Err(DomainError::Forbidden);
        }

        self.posts.delete(post_id).await?;
        tracing::info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    /// Published, public posts, newest first, optionally filtered.
    pub async fn list_public_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.list_published_public().await?;

        let search = filter.search.as_deref().map(str::to_lowercase);
        let filtered = posts
            .into_iter()
            .filter(|post| {
                let matches_search = search.as_deref().is_none_or(|term| {
                    post.title.to_lowercase().contains(term)
                        || post
                            .summary
                            .as_deref()
                            .is_some_and(|s| s.to_lowercase().contains(term))
                });
                let matches_tag = filter
                    .tag
                    .as_deref()
                    .is_none_or(|tag| post.tags.iter().any(|t| t.as_str() == tag));
                matches_search && matches_tag
            })
            .collect();

        Ok(filtered)
    }

    /// All posts by an author that `viewer` is allowed to see, newest first.
    pub async fn list_posts_by_author(
        &self,
        author_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.list_by_author(author_id).await?;

        if viewer == Some(author_id) {
            return Ok(posts);
        }

        let accepted_follower = self.is_accepted_follower(viewer, author_id).await?;
        Ok(posts
            .into_iter()
            .filter(|post| visible_to(post, viewer, accepted_follower))
            .collect())
    }

    /// Fetch one post by slug, subject to the same visibility rules.
    ///
    /// A hidden post and a missing slug are indistinguishable: both are
    /// `NotFound`.
    pub async fn get_post_by_slug(
        &self,
        slug: &str,
        viewer: Option<Uuid>,
    ) -> Result<Post, DomainError> {
        let post = self
            .posts
            .find_by_slug(slug)
            .await?
            .ok_or(DomainError::not_found("post"))?;

        let accepted_follower = self.is_accepted_follower(viewer, post.author_id).await?;
        if !visible_to(&post, viewer, accepted_follower) {
            return Err(DomainError::not_found("post"));
        }

        Ok(post)
    }

    async fn is_accepted_follower(
        &self,
        viewer: Option<Uuid>,
        author_id: Uuid,
    ) -> Result<bool, DomainError> {
        let Some(viewer_id) = viewer else {
            return Ok(false);
        };
        if viewer_id == author_id {
            return Ok(true);
        }
        let pair = self.follows.find_pair(viewer_id, author_id).await?;
        Ok(pair.is_some_and(|f| f.status == FollowStatus::Accepted))
    }

    async fn unique_slug(&self, title: &str) -> Result<String, DomainError> {
        let base = slug::slugify(title);

        for _ in 0..SLUG_ATTEMPTS {
            let suffix = Uuid::new_v4().simple().to_string();
            let candidate = slug::with_suffix(&base, &suffix[..8]);
            if !self.posts.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            tracing::debug!(slug = %candidate, "Slug collision, retrying");
        }

        Err(DomainError::Internal(
            "could not derive a unique slug".to_string(),
        ))
    }

    async fn notify_followers(&self, post: &Post) -> Result<(), DomainError> {
        let author = self
            .profiles
            .find_by_id(post.author_id)
            .await?
            .ok_or(DomainError::not_found("profile"))?;

        let followers = self.follows.list_accepted_followers(post.author_id).await?;
        for follow in &followers {
            let notification = Notification::new(
                follow.follower_id,
                NotificationKind::NewPost,
                format!("{} published \"{}\"", author.username, post.title),
                Some(post.id),
            );
            self.notifications.save(notification).await?;
        }

        if !followers.is_empty() {
            tracing::debug!(
                post_id = %post.id,
                followers = followers.len(),
                "Publish fan-out delivered"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(author: Uuid, published: bool, visibility: Visibility) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id: author,
            title: "t".into(),
            content: "c".into(),
            summary: None,
            visibility,
            published,
            tags: vec![],
            slug: "t-abcd1234".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn author_sees_everything() {
        let author = Uuid::new_v4();
        let p = post(author, false, Visibility::Private);
        assert!(visible_to(&p, Some(author), false));
    }

    #[test]
    fn unpublished_is_hidden_from_everyone_else() {
        let p = post(Uuid::new_v4(), false, Visibility::Public);
        assert!(!visible_to(&p, Some(Uuid::new_v4()), true));
        assert!(!visible_to(&p, None, false));
    }

    #[test]
    fn private_is_author_only() {
        let p = post(Uuid::new_v4(), true, Visibility::Private);
        assert!(!visible_to(&p, Some(Uuid::new_v4()), true));
    }

    #[test]
    fn followers_only_requires_accepted_follow() {
        let p = post(Uuid::new_v4(), true, Visibility::Followers);
        let viewer = Some(Uuid::new_v4());
        assert!(visible_to(&p, viewer, true));
        assert!(!visible_to(&p, viewer, false));
        assert!(!visible_to(&p, None, false));
    }
}
