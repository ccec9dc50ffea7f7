//! Social graph service - follow-request lifecycle and notification delivery.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Follow, FollowStatus, Notification, NotificationKind};
use crate::error::DomainError;
use crate::ports::{
    BaseRepository, FollowRepository, NotificationRepository, ProfileRepository,
};

/// Follow-request lifecycle and notification delivery.
pub struct SocialGraphService {
    profiles: Arc<dyn ProfileRepository>,
    follows: Arc<dyn FollowRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl SocialGraphService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        follows: Arc<dyn FollowRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            profiles,
            follows,
            notifications,
        }
    }

    /// Request to follow another user.
    ///
    /// At most one relationship may exist per (follower, followee) pair; a
    /// second request is a conflict regardless of the first one's status.
    /// The followee receives a `follow_request` notification.
    pub async fn request_follow(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<Follow, DomainError> {
        if follower_id == followee_id {
            return Err(DomainError::validation("cannot follow yourself"));
        }

        let follower = self
            .profiles
            .find_by_id(follower_id)
            .await?
            .ok_or(DomainError::not_found("profile"))?;
        if self.profiles.find_by_id(followee_id).await?.is_none() {
            return Err(DomainError::not_found("profile"));
        }

        if self
            .follows
            .find_pair(follower_id, followee_id)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(
                "follow relationship already exists".to_string(),
            ));
        }

        let follow = self.follows.save(Follow::new(follower_id, followee_id)).await?;

        let notification = Notification::new(
            followee_id,
            NotificationKind::FollowRequest,
            format!("{} wants to follow you", follower.username),
            Some(follow.id),
        );
        self.notifications.save(notification).await?;

        tracing::info!(
            follower = %follower_id,
            followee = %followee_id,
            "Follow requested"
        );
        Ok(follow)
    }

    /// Accept or reject a pending follow request. Only the followee may
    /// respond.
    pub async fn respond_to_follow(
        &self,
        relationship_id: Uuid,
        followee_id: Uuid,
        accept: bool,
    ) -> Result<Follow, DomainError> {
        let mut follow = self
            .follows
            .find_by_id(relationship_id)
            .await?
            .ok_or(DomainError::not_found("follow request"))?;

        if follow.followee_id != followee_id {
            return Err(DomainError::Forbidden);
        }

        follow.status = if accept {
            FollowStatus::Accepted
        } else {
            FollowStatus::Rejected
        };
        let saved = self.follows.save(follow).await?;

        tracing::info!(relationship = %relationship_id, status = %saved.status, "Follow answered");
        Ok(saved)
    }

    /// Accepted relationships where `user_id` is the follower.
    pub async fn list_following(&self, user_id: Uuid) -> Result<Vec<Follow>, DomainError> {
        Ok(self.follows.list_accepted_following(user_id).await?)
    }

    /// Accepted relationships where `user_id` is the followee.
    pub async fn list_followers(&self, user_id: Uuid) -> Result<Vec<Follow>, DomainError> {
        Ok(self.follows.list_accepted_followers(user_id).await?)
    }

    /// Newest-first notification list for a user.
    pub async fn list_notifications(&self, user_id: Uuid) -> Result<Vec<Notification>, DomainError> {
        Ok(self.notifications.list_for_recipient(user_id).await?)
    }

    /// Count of unread notifications. Always equals the number of entries in
    /// `list_notifications` with `read = false`.
    pub async fn unread_count(&self, user_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.notifications.count_unread(user_id).await?)
    }

    /// Mark one notification read. Idempotent: marking an already-read
    /// notification is a no-op, not an error.
    pub async fn mark_notification_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut notification = self
            .notifications
            .find_by_id(notification_id)
            .await?
            .ok_or(DomainError::not_found("notification"))?;

        if notification.recipient_id != user_id {
            return Err(DomainError::Forbidden);
        }

        if notification.read {
            return Ok(());
        }

        notification.read = true;
        self.notifications.save(notification).await?;
        Ok(())
    }

    /// Mark every notification for a user read. Idempotent.
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<(), DomainError> {
        Ok(self.notifications.mark_all_read(user_id).await?)
    }
}
