//! HTTP handlers and route configuration.

mod assistant;
mod auth;
mod follows;
mod health;
mod notifications;
mod posts;
mod profiles;

use std::sync::Arc;

use actix_web::web;

use quill_core::ports::RateLimiter;

use crate::middleware::rate_limit::RateLimitMiddleware;

/// Configure all application routes.
///
/// The assistant scope is rate limited: every request there may turn into an
/// upstream API call.
pub fn configure_routes(cfg: &mut web::ServiceConfig, assistant_limiter: Arc<dyn RateLimiter>) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Profile routes
            .service(
                web::scope("/profiles")
                    .route("/me", web::put().to(profiles::update_me))
                    .route("/{username}", web::get().to(profiles::get))
                    .route("/{username}/posts", web::get().to(profiles::list_posts)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_public))
                    .route("", web::post().to(posts::create))
                    .route("/{slug}", web::get().to(posts::get_by_slug))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Follow routes
            .service(
                web::scope("/follows")
                    .route("/following", web::get().to(follows::list_following))
                    .route("/followers", web::get().to(follows::list_followers))
                    .route("/{user_id}", web::post().to(follows::request))
                    .route("/{id}/respond", web::post().to(follows::respond)),
            )
            // Notification routes
            .service(
                web::scope("/notifications")
                    .route("", web::get().to(notifications::list))
                    .route("/unread-count", web::get().to(notifications::unread_count))
                    .route("/read-all", web::post().to(notifications::mark_all_read))
                    .route("/{id}/read", web::post().to(notifications::mark_read)),
            )
            // Assistant routes
            .service(
                web::scope("/assistant")
                    .wrap(RateLimitMiddleware::new(assistant_limiter))
                    .route("/summarize", web::post().to(assistant::summarize))
                    .route("/ideas", web::post().to(assistant::ideas))
                    .route("/improve", web::post().to(assistant::improve))
                    .route("/keywords", web::post().to(assistant::keywords))
                    .route("/seo", web::post().to(assistant::seo))
                    .route("/chat", web::post().to(assistant::chat)),
            ),
    );
}
