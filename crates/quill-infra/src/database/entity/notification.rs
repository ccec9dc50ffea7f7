//! Notification entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// Stored notification kind. Mirrors the closed domain enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum NotificationKind {
    #[sea_orm(string_value = "follow_request")]
    FollowRequest,
    #[sea_orm(string_value = "new_post")]
    NewPost,
    #[sea_orm(string_value = "post_like")]
    PostLike,
    #[sea_orm(string_value = "comment")]
    Comment,
}

impl From<NotificationKind> for quill_core::domain::NotificationKind {
    fn from(k: NotificationKind) -> Self {
        match k {
            NotificationKind::FollowRequest => Self::FollowRequest,
            NotificationKind::NewPost => Self::NewPost,
            NotificationKind::PostLike => Self::PostLike,
            NotificationKind::Comment => Self::Comment,
        }
    }
}

impl From<quill_core::domain::NotificationKind> for NotificationKind {
    fn from(k: quill_core::domain::NotificationKind) -> Self {
        match k {
            quill_core::domain::NotificationKind::FollowRequest => Self::FollowRequest,
            quill_core::domain::NotificationKind::NewPost => Self::NewPost,
            quill_core::domain::NotificationKind::PostLike => Self::PostLike,
            quill_core::domain::NotificationKind::Comment => Self::Comment,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub read: bool,
    pub related_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::RecipientId",
        to = "super::profile::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Recipient,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for quill_core::domain::Notification {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            recipient_id: model.recipient_id,
            kind: model.kind.into(),
            message: model.message,
            read: model.read,
            related_id: model.related_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<quill_core::domain::Notification> for ActiveModel {
    fn from(notification: quill_core::domain::Notification) -> Self {
        Self {
            id: Set(notification.id),
            recipient_id: Set(notification.recipient_id),
            kind: Set(notification.kind.into()),
            message: Set(notification.message),
            read: Set(notification.read),
            related_id: Set(notification.related_id),
            created_at: Set(notification.created_at.into()),
        }
    }
}
