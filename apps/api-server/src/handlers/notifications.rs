//! Notification handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::Notification;
use quill_shared::dto::{NotificationResponse, UnreadCountResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_notification_response(notification: Notification) -> NotificationResponse {
    NotificationResponse {
        id: notification.id,
        kind: notification.kind.as_str().to_string(),
        message: notification.message,
        read: notification.read,
        related_id: notification.related_id,
        created_at: notification.created_at,
    }
}

/// GET /api/notifications - newest first.
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let notifications = state.social.list_notifications(identity.user_id).await?;
    let responses: Vec<NotificationResponse> = notifications
        .into_iter()
        .map(to_notification_response)
        .collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let count = state.social.unread_count(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(UnreadCountResponse { count }))
}

/// POST /api/notifications/{id}/read - idempotent.
pub async fn mark_read(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let notification_id = path.into_inner();

    state
        .social
        .mark_notification_read(notification_id, identity.user_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/notifications/read-all - idempotent.
pub async fn mark_all_read(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.social.mark_all_read(identity.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
