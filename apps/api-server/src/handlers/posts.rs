//! Post handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Post, Visibility};
use quill_core::ports::BaseRepository;
use quill_core::services::{NewPost, PostFilter, PostUpdate};
use quill_shared::dto::{
    CreatePostRequest, PostListQuery, PostResponse, ProfileResponse, UpdatePostRequest,
};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::profiles::to_profile_response;

fn parse_visibility(value: &str) -> Result<Visibility, AppError> {
    value.parse().map_err(AppError::BadRequest)
}

fn to_post_response(post: Post, author: Option<ProfileResponse>) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        summary: post.summary,
        visibility: post.visibility.as_str().to_string(),
        published: post.published,
        tags: post.tags,
        slug: post.slug,
        author_id: post.author_id,
        author,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// Attach each post's author profile, one lookup per distinct author.
pub(crate) async fn with_authors(
    state: &AppState,
    posts: Vec<Post>,
) -> Result<Vec<PostResponse>, AppError> {
    let mut authors: HashMap<Uuid, ProfileResponse> = HashMap::new();
    for post in &posts {
        if authors.contains_key(&post.author_id) {
            continue;
        }
        if let Some(profile) = state.profiles.find_by_id(post.author_id).await? {
            authors.insert(post.author_id, to_profile_response(&profile));
        }
    }

    Ok(posts
        .into_iter()
        .map(|post| {
            let author = authors.get(&post.author_id).cloned();
            to_post_response(post, author)
        })
        .collect())
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let new = NewPost {
        title: req.title,
        content: req.content,
        summary: req.summary,
        visibility: parse_visibility(&req.visibility)?,
        tags: req.tags,
        published: req.published,
    };

    let post = state.content.create_post(identity.user_id, new).await?;
    Ok(HttpResponse::Created().json(to_post_response(post, None)))
}

/// GET /api/posts?search=&tag=
pub async fn list_public(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = PostFilter {
        search: query.search,
        tag: query.tag,
    };

    let posts = state.content.list_public_posts(filter).await?;
    Ok(HttpResponse::Ok().json(with_authors(&state, posts).await?))
}

/// GET /api/posts/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let viewer = identity.0.map(|i| i.user_id);

    let post = state.content.get_post_by_slug(&slug, viewer).await?;
    let mut responses = with_authors(&state, vec![post]).await?;
    Ok(HttpResponse::Ok().json(responses.remove(0)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();

    let visibility = match req.visibility.as_deref() {
        Some(value) => Some(parse_visibility(value)?),
        None => None,
    };

    let update = PostUpdate {
        title: req.title,
        content: req.content,
        summary: req.summary,
        visibility,
        tags: req.tags,
        published: req.published,
    };

    let post = state
        .content
        .update_post(post_id, identity.user_id, update)
        .await?;
    Ok(HttpResponse::Ok().json(to_post_response(post, None)))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    state.content.delete_post(post_id, identity.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
