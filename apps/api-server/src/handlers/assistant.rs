//! Assistant handlers.
//!
//! Every operation here degrades to a deterministic fallback when the
//! upstream call fails; the only error a caller can see is a validation
//! rejection for empty input.

use actix_web::{HttpResponse, web};

use quill_shared::dto::{
    ChatRequest, ChatResponse, IdeasRequest, IdeasResponse, ImproveRequest, ImproveResponse,
    KeywordsRequest, KeywordsResponse, SeoRequest, SeoResponse, SummarizeRequest,
    SummarizeResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/assistant/summarize
pub async fn summarize(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<SummarizeRequest>,
) -> AppResult<HttpResponse> {
    let summary = state.assistant.summarize(&body.content).await?;
    Ok(HttpResponse::Ok().json(SummarizeResponse { summary }))
}

/// POST /api/assistant/ideas
pub async fn ideas(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<IdeasRequest>,
) -> AppResult<HttpResponse> {
    let ideas = state.assistant.generate_ideas(&body.topic, body.count).await?;
    Ok(HttpResponse::Ok().json(IdeasResponse { ideas }))
}

/// POST /api/assistant/improve
pub async fn improve(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<ImproveRequest>,
) -> AppResult<HttpResponse> {
    let content = state
        .assistant
        .improve_content(&body.content, &body.instruction)
        .await?;
    Ok(HttpResponse::Ok().json(ImproveResponse { content }))
}

/// POST /api/assistant/keywords
pub async fn keywords(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<KeywordsRequest>,
) -> AppResult<HttpResponse> {
    let keywords = state
        .assistant
        .generate_keywords(&body.title, &body.content)
        .await?;
    Ok(HttpResponse::Ok().json(KeywordsResponse { keywords }))
}

/// POST /api/assistant/seo
pub async fn seo(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<SeoRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .assistant
        .optimize_seo(&body.title, &body.content)
        .await?;
    Ok(HttpResponse::Ok().json(SeoResponse {
        optimized_title: result.optimized_title,
        meta_description: result.meta_description,
        keywords: result.keywords,
        suggestions: result.suggestions,
    }))
}

/// POST /api/assistant/chat
pub async fn chat(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<ChatRequest>,
) -> AppResult<HttpResponse> {
    let reply = state
        .assistant
        .chat(&body.message, body.context.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(ChatResponse { reply }))
}
