//! Follow-relationship entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// Stored follow status. Mirrors the closed domain enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FollowStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<FollowStatus> for quill_core::domain::FollowStatus {
    fn from(s: FollowStatus) -> Self {
        match s {
            FollowStatus::Pending => Self::Pending,
            FollowStatus::Accepted => Self::Accepted,
            FollowStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<quill_core::domain::FollowStatus> for FollowStatus {
    fn from(s: quill_core::domain::FollowStatus) -> Self {
        match s {
            quill_core::domain::FollowStatus::Pending => Self::Pending,
            quill_core::domain::FollowStatus::Accepted => Self::Accepted,
            quill_core::domain::FollowStatus::Rejected => Self::Rejected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub status: FollowStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::FollowerId",
        to = "super::profile::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::FolloweeId",
        to = "super::profile::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Followee,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for quill_core::domain::Follow {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            follower_id: model.follower_id,
            followee_id: model.followee_id,
            status: model.status.into(),
            created_at: model.created_at.into(),
        }
    }
}

impl From<quill_core::domain::Follow> for ActiveModel {
    fn from(follow: quill_core::domain::Follow) -> Self {
        Self {
            id: Set(follow.id),
            follower_id: Set(follow.follower_id),
            followee_id: Set(follow.followee_id),
            status: Set(follow.status.into()),
            created_at: Set(follow.created_at.into()),
        }
    }
}
