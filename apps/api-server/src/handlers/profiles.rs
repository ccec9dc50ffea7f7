//! Profile handlers.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use quill_core::domain::Profile;
use quill_core::ports::{BaseRepository, ProfileRepository};
use quill_shared::dto::{ProfileResponse, UpdateProfileRequest};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::posts::with_authors;

pub(crate) fn to_profile_response(profile: &Profile) -> ProfileResponse {
    ProfileResponse {
        id: profile.id,
        username: profile.username.clone(),
        full_name: profile.full_name.clone(),
        avatar_url: profile.avatar_url.clone(),
        bio: profile.bio.clone(),
        created_at: profile.created_at,
    }
}

/// GET /api/profiles/{username}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let username = path.into_inner();

    let profile = state
        .profiles
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound("profile not found".to_string()))?;

    Ok(HttpResponse::Ok().json(to_profile_response(&profile)))
}

/// PUT /api/profiles/me - update own profile.
pub async fn update_me(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut profile = state
        .profiles
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("profile not found".to_string()))?;

    if let Some(full_name) = req.full_name {
        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(AppError::BadRequest("Full name must not be empty".to_string()));
        }
        profile.full_name = full_name;
    }
    if let Some(avatar_url) = req.avatar_url {
        profile.avatar_url = Some(avatar_url);
    }
    if let Some(bio) = req.bio {
        profile.bio = Some(bio);
    }
    profile.updated_at = Utc::now();

    let saved = state.profiles.save(profile).await?;
    Ok(HttpResponse::Ok().json(to_profile_response(&saved)))
}

/// GET /api/profiles/{username}/posts - an author's posts, visibility-filtered
/// relative to the (optional) viewer.
pub async fn list_posts(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();

    let author = state
        .profiles
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound("profile not found".to_string()))?;

    let viewer = identity.0.map(|i| i.user_id);
    let posts = state.content.list_posts_by_author(author.id, viewer).await?;

    Ok(HttpResponse::Ok().json(with_authors(&state, posts).await?))
}
