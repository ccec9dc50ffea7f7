//! Follow handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::Follow;
use quill_shared::dto::{FollowResponse, RespondFollowRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_follow_response(follow: Follow) -> FollowResponse {
    FollowResponse {
        id: follow.id,
        follower_id: follow.follower_id,
        followee_id: follow.followee_id,
        status: follow.status.as_str().to_string(),
        created_at: follow.created_at,
    }
}

/// POST /api/follows/{user_id} - request to follow a user.
pub async fn request(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let followee_id = path.into_inner();

    let follow = state
        .social
        .request_follow(identity.user_id, followee_id)
        .await?;
    Ok(HttpResponse::Created().json(to_follow_response(follow)))
}

/// POST /api/follows/{id}/respond - accept or reject a follow request.
pub async fn respond(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<RespondFollowRequest>,
) -> AppResult<HttpResponse> {
    let relationship_id = path.into_inner();

    let follow = state
        .social
        .respond_to_follow(relationship_id, identity.user_id, body.accept)
        .await?;
    Ok(HttpResponse::Ok().json(to_follow_response(follow)))
}

/// GET /api/follows/following - accepted follows where the caller follows.
pub async fn list_following(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let follows = state.social.list_following(identity.user_id).await?;
    let responses: Vec<FollowResponse> = follows.into_iter().map(to_follow_response).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// GET /api/follows/followers - accepted follows where the caller is followed.
pub async fn list_followers(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let follows = state.social.list_followers(identity.user_id).await?;
    let responses: Vec<FollowResponse> = follows.into_iter().map(to_follow_response).collect();
    Ok(HttpResponse::Ok().json(responses))
}
