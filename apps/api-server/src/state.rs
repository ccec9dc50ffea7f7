//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{
    FollowRepository, NotificationRepository, PostRepository, ProfileRepository, TextGenerator,
};
use quill_core::services::{AssistantService, ContentService, SocialGraphService};
use quill_infra::{
    GeminiClient, GeminiConfig, InMemoryFollowRepository, InMemoryNotificationRepository,
    InMemoryPostRepository, InMemoryProfileRepository, OfflineGenerator,
    PostgresFollowRepository, PostgresNotificationRepository, PostgresPostRepository,
    PostgresProfileRepository,
};

use crate::config::AppConfig;

type Repositories = (
    Arc<dyn ProfileRepository>,
    Arc<dyn PostRepository>,
    Arc<dyn FollowRepository>,
    Arc<dyn NotificationRepository>,
);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileRepository>,
    pub content: Arc<ContentService>,
    pub social: Arc<SocialGraphService>,
    pub assistant: Arc<AssistantService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (profiles, posts, follows, notifications) = Self::build_repositories(config).await;

        let content = Arc::new(ContentService::new(
            posts,
            profiles.clone(),
            follows.clone(),
            notifications.clone(),
        ));
        let social = Arc::new(SocialGraphService::new(
            profiles.clone(),
            follows,
            notifications,
        ));
        let assistant = Arc::new(AssistantService::new(Self::build_generator()));

        tracing::info!("Application state initialized");

        Self {
            profiles,
            content,
            social,
            assistant,
        }
    }

    async fn build_repositories(config: &AppConfig) -> Repositories {
        if let Some(db_config) = &config.database {
            match quill_infra::connect(db_config).await {
                Ok(conn) => {
                    return (
                        Arc::new(PostgresProfileRepository::new(conn.clone())),
                        Arc::new(PostgresPostRepository::new(conn.clone())),
                        Arc::new(PostgresFollowRepository::new(conn.clone())),
                        Arc::new(PostgresNotificationRepository::new(conn)),
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory repositories.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running with in-memory repositories.");
        }

        (
            Arc::new(InMemoryProfileRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryFollowRepository::new()),
            Arc::new(InMemoryNotificationRepository::new()),
        )
    }

    fn build_generator() -> Arc<dyn TextGenerator> {
        match GeminiConfig::from_env() {
            Some(config) => match GeminiClient::new(config) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    tracing::error!(
                        "Failed to build assistant client: {}. Assistant runs in fallback mode.",
                        e
                    );
                    Arc::new(OfflineGenerator)
                }
            },
            None => {
                tracing::warn!(
                    "ASSISTANT_API_KEY not set. Assistant runs in deterministic fallback mode."
                );
                Arc::new(OfflineGenerator)
            }
        }
    }
}
