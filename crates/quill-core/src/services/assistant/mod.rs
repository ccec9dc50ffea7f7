//! Assistant gateway - authoring intents translated into upstream prompts,
//! with deterministic fallback output whenever the upstream call fails.
//!
//! No operation here ever surfaces an upstream failure: a timeout, non-2xx
//! status, or malformed response degrades to the fallback path and the caller
//! receives a usable result either way. Empty inputs are the one exception,
//! rejected with `Validation` before any network call. No retries, no
//! caching: identical inputs re-issue identical upstream calls.

mod fallback;
mod parse;
mod prompts;

use std::sync::Arc;

use crate::domain::SeoOptimization;
use crate::error::DomainError;
use crate::ports::TextGenerator;

const DEFAULT_IDEA_COUNT: usize = 5;
const MAX_IDEA_COUNT: usize = 10;
const MAX_KEYWORDS: usize = 10;
const MAX_SEO_KEYWORDS: usize = 5;
const MAX_SEO_SUGGESTIONS: usize = 3;

/// Stateless gateway over the upstream text generator.
pub struct AssistantService {
    generator: Arc<dyn TextGenerator>,
}

impl AssistantService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// 2-3 sentence summary of a post body; falls back to the first two
    /// sentences of the content.
    pub async fn summarize(&self, content: &str) -> Result<String, DomainError> {
        let content = non_empty(content, "content")?;

        match self.generate(&prompts::summary(content), "summarize").await {
            Some(text) => Ok(text),
            None => Ok(fallback::summary(content)),
        }
    }

    /// Blog post ideas about a topic. `count` defaults to 5 and is capped at
    /// 10; the fallback is a fixed set of five templated ideas.
    pub async fn generate_ideas(
        &self,
        topic: &str,
        count: Option<usize>,
    ) -> Result<Vec<String>, DomainError> {
        let topic = non_empty(topic, "topic")?;
        let count = count.unwrap_or(DEFAULT_IDEA_COUNT).clamp(1, MAX_IDEA_COUNT);

        match self.generate(&prompts::ideas(topic, count), "ideas").await {
            Some(text) => {
                let ideas = parse::list_items(&text, count);
                if ideas.is_empty() {
                    Ok(fallback::ideas(topic))
                } else {
                    Ok(ideas)
                }
            }
            None => Ok(fallback::ideas(topic)),
        }
    }

    /// Rewrite content per an instruction; falls back to the original content
    /// unchanged.
    pub async fn improve_content(
        &self,
        content: &str,
        instruction: &str,
    ) -> Result<String, DomainError> {
        let content = non_empty(content, "content")?;
        let instruction = non_empty(instruction, "instruction")?;

        match self
            .generate(&prompts::improve(content, instruction), "improve")
            .await
        {
            Some(text) => Ok(text),
            None => Ok(content.to_string()),
        }
    }

    /// Up to 10 SEO keywords; falls back to an empty sequence.
    pub async fn generate_keywords(
        &self,
        title: &str,
        content: &str,
    ) -> Result<Vec<String>, DomainError> {
        let title = non_empty(title, "title")?;
        let content = non_empty(content, "content")?;

        match self
            .generate(&prompts::keywords(title, content), "keywords")
            .await
        {
            Some(text) => Ok(parse::list_items(&text, MAX_KEYWORDS)),
            None => Ok(Vec::new()),
        }
    }

    /// Structured SEO optimization. Every field the upstream response omits
    /// keeps its fallback default; a failed call returns all defaults.
    pub async fn optimize_seo(
        &self,
        title: &str,
        content: &str,
    ) -> Result<SeoOptimization, DomainError> {
        let title = non_empty(title, "title")?;
        let content = non_empty(content, "content")?;

        let mut result = fallback::seo(title, content);

        if let Some(text) = self.generate(&prompts::seo(title, content), "seo").await {
            let fields = parse::seo_response(&text);
            if let Some(optimized) = fields.title {
                result.optimized_title = optimized;
            }
            if let Some(meta) = fields.meta {
                result.meta_description = meta;
            }
            result.keywords = fields.keywords.into_iter().take(MAX_SEO_KEYWORDS).collect();
            result.suggestions = fields
                .suggestions
                .into_iter()
                .take(MAX_SEO_SUGGESTIONS)
                .collect();
        }

        Ok(result)
    }

    /// Free-form writing-assistant chat; falls back to a canned topic-matched
    /// response.
    pub async fn chat(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<String, DomainError> {
        let message = non_empty(message, "message")?;

        match self.generate(&prompts::chat(message, context), "chat").await {
            Some(text) => Ok(text),
            None => Ok(fallback::chat(message)),
        }
    }

    /// One upstream call. `None` means "use the fallback": failures and
    /// blank completions are treated alike.
    async fn generate(&self, prompt: &str, operation: &'static str) -> Option<String> {
        match self.generator.generate(prompt).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    tracing::warn!(operation, "Upstream returned empty text, using fallback");
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Err(err) => {
                tracing::warn!(operation, error = %err, "Upstream call failed, using fallback");
                None
            }
        }
    }
}

fn non_empty<'a>(value: &'a str, field: &str) -> Result<&'a str, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpstreamError;
    use async_trait::async_trait;

    struct Failing;

    #[async_trait]
    impl TextGenerator for Failing {
        async fn generate(&self, _prompt: &str) -> Result<String, UpstreamError> {
            Err(UpstreamError::Status(500))
        }
    }

    struct Canned(&'static str);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _prompt: &str) -> Result<String, UpstreamError> {
            Ok(self.0.to_string())
        }
    }

    fn failing() -> AssistantService {
        AssistantService::new(Arc::new(Failing))
    }

    fn canned(text: &'static str) -> AssistantService {
        AssistantService::new(Arc::new(Canned(text)))
    }

    #[tokio::test]
    async fn summarize_falls_back_to_leading_sentences() {
        let summary = failing().summarize("A. B. C.").await.unwrap();
        assert_eq!(summary, "A. B...");
    }

    #[tokio::test]
    async fn summarize_rejects_empty_content() {
        let result = failing().summarize("   ").await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn summarize_trims_successful_output() {
        let summary = canned("  A fine summary.  ").summarize("body").await.unwrap();
        assert_eq!(summary, "A fine summary.");
    }

    #[tokio::test]
    async fn ideas_fall_back_to_templates() {
        let ideas = failing().generate_ideas("gardening", None).await.unwrap();
        assert_eq!(ideas.len(), 5);
        assert!(ideas.iter().all(|i| i.contains("gardening")));
    }

    #[tokio::test]
    async fn ideas_strip_numbering_and_respect_count() {
        let service = canned("1. One\n2. Two\n3. Three");
        let ideas = service.generate_ideas("x", Some(2)).await.unwrap();
        assert_eq!(ideas, vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn improve_falls_back_to_original_content() {
        let improved = failing()
            .improve_content("original text", "make it pop")
            .await
            .unwrap();
        assert_eq!(improved, "original text");
    }

    #[tokio::test]
    async fn keywords_fall_back_to_empty() {
        let keywords = failing().generate_keywords("t", "c").await.unwrap();
        assert!(keywords.is_empty());
    }

    #[tokio::test]
    async fn seo_failure_echoes_inputs() {
        let result = failing().optimize_seo("My Title", "Body text").await.unwrap();
        assert_eq!(result.optimized_title, "My Title");
        assert_eq!(result.meta_description, "Body text...");
        assert!(result.keywords.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[tokio::test]
    async fn seo_missing_keywords_line_leaves_empty_list() {
        let service = canned("TITLE: Optimized\nMETA: A description");
        let result = service.optimize_seo("Original", "Body").await.unwrap();
        assert_eq!(result.optimized_title, "Optimized");
        assert_eq!(result.meta_description, "A description");
        assert!(result.keywords.is_empty());
    }

    #[tokio::test]
    async fn seo_caps_keywords_and_suggestions() {
        let service = canned(
            "KEYWORDS: a, b, c, d, e, f, g\n- s1\n- s2\n- s3\n- s4",
        );
        let result = service.optimize_seo("T", "C").await.unwrap();
        assert_eq!(result.keywords.len(), 5);
        assert_eq!(result.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn chat_failure_matches_seo_keyword() {
        let reply = failing()
            .chat("How do I improve my SEO?", None)
            .await
            .unwrap();
        assert!(reply.contains("meta descriptions"));
        assert!(!reply.contains("all aspects of blogging"));
    }

    #[tokio::test]
    async fn chat_failure_without_keyword_is_generic() {
        let reply = failing().chat("hello", None).await.unwrap();
        assert!(reply.contains("all aspects of blogging"));
    }
}
