//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use quill_core::domain::{Follow, Notification, Post, Profile};
use quill_core::error::RepoError;
use quill_core::ports::{
    FollowRepository, NotificationRepository, PostRepository, ProfileRepository,
};

use super::entity::follow::{self, Entity as FollowEntity};
use super::entity::notification::{self, Entity as NotificationEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::profile::{self, Entity as ProfileEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL profile repository.
pub type PostgresProfileRepository = PostgresBaseRepository<ProfileEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL follow repository.
pub type PostgresFollowRepository = PostgresBaseRepository<FollowEntity>;

/// PostgreSQL notification repository.
pub type PostgresNotificationRepository = PostgresBaseRepository<NotificationEntity>;

fn query_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepoError> {
        let result = ProfileEntity::find()
            .filter(profile::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, RepoError> {
        tracing::debug!(username = %username, "Finding profile by username");

        let result = ProfileEntity::find()
            .filter(profile::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        let count = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .count(&self.db)
            .await
            .map_err(query_err)?;

        Ok(count > 0)
    }

    async fn list_published_public(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Published.eq(true))
            .filter(post::Column::Visibility.eq(post::Visibility::Public))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn find_pair(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<Option<Follow>, RepoError> {
        let result = FollowEntity::find()
            .filter(follow::Column::FollowerId.eq(follower_id))
            .filter(follow::Column::FolloweeId.eq(followee_id))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn list_accepted_followers(&self, followee_id: Uuid) -> Result<Vec<Follow>, RepoError> {
        let result = FollowEntity::find()
            .filter(follow::Column::FolloweeId.eq(followee_id))
            .filter(follow::Column::Status.eq(follow::FollowStatus::Accepted))
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_accepted_following(&self, follower_id: Uuid) -> Result<Vec<Follow>, RepoError> {
        let result = FollowEntity::find()
            .filter(follow::Column::FollowerId.eq(follower_id))
            .filter(follow::Column::Status.eq(follow::FollowStatus::Accepted))
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn list_for_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>, RepoError> {
        let result = NotificationEntity::find()
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .order_by_desc(notification::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count_unread(&self, recipient_id: Uuid) -> Result<u64, RepoError> {
        NotificationEntity::find()
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .filter(notification::Column::Read.eq(false))
            .count(&self.db)
            .await
            .map_err(query_err)
    }

    async fn mark_all_read(&self, recipient_id: Uuid) -> Result<(), RepoError> {
        NotificationEntity::update_many()
            .col_expr(notification::Column::Read, Expr::value(true))
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .filter(notification::Column::Read.eq(false))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(())
    }
}
