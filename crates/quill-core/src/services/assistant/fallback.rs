//! Deterministic fallback output for failed upstream calls.
//!
//! Pure functions of the original inputs: every assistant operation must
//! produce a usable result even when the upstream API is down, so each
//! fallback is derived locally and is always non-empty where the contract
//! requires it.

use crate::domain::SeoOptimization;

use super::parse::truncate_chars;

const META_DESCRIPTION_CHARS: usize = 150;

/// First two sentences of the content, with a trailing ellipsis when the
/// content went on.
pub fn summary(content: &str) -> String {
    let taken: Vec<&str> = content.split(". ").take(2).collect();
    let mut out = taken.join(". ");
    if taken.len() == 2 {
        out.push_str("...");
    }
    out
}

/// Five templated ideas interpolating the topic.
pub fn ideas(topic: &str) -> Vec<String> {
    vec![
        format!("How to get started with {topic}"),
        format!("Top 10 {topic} tips for beginners"),
        format!("The future of {topic}"),
        format!("Common {topic} mistakes to avoid"),
        format!("{topic} best practices guide"),
    ]
}

/// Echo the original title, derive the meta description by truncation, and
/// leave keywords and suggestions empty.
pub fn seo(title: &str, content: &str) -> SeoOptimization {
    SeoOptimization {
        optimized_title: title.to_string(),
        meta_description: format!("{}...", truncate_chars(content, META_DESCRIPTION_CHARS)),
        keywords: Vec::new(),
        suggestions: Vec::new(),
    }
}

/// Canned topic-matched chat responses, keyword-matched against the message.
pub fn chat(message: &str) -> String {
    let message = message.to_lowercase();

    if message.contains("write") || message.contains("writing") {
        return "Here are some writing tips:\n\n\
                1. Start with a compelling hook to grab attention\n\
                2. Use clear, concise language\n\
                3. Break up text with headers and bullet points\n\
                4. Tell stories to engage readers\n\
                5. End with a strong conclusion or call-to-action\n\n\
                What specific aspect of writing would you like help with?"
            .to_string();
    }

    if message.contains("seo") || message.contains("search") {
        return "For better SEO:\n\n\
                1. Use relevant keywords naturally throughout your content\n\
                2. Write descriptive titles (50-60 characters)\n\
                3. Create compelling meta descriptions\n\
                4. Use header tags (H1, H2, H3) properly\n\
                5. Include internal and external links\n\
                6. Optimize images with alt text\n\
                7. Focus on user intent and valuable content\n\n\
                Would you like me to help optimize a specific post?"
            .to_string();
    }

    if message.contains("idea") || message.contains("topic") {
        return "Here are some blog post ideas:\n\n\
                1. How-to guides in your field\n\
                2. Industry trends and predictions\n\
                3. Personal experiences and lessons learned\n\
                4. Tool reviews and comparisons\n\
                5. Behind-the-scenes content\n\
                6. Expert interviews\n\
                7. Case studies\n\
                8. Common mistakes to avoid\n\n\
                What niche or topic are you interested in?"
            .to_string();
    }

    if message.contains("engagement") || message.contains("engaging") {
        return "To make content more engaging:\n\n\
                1. Use storytelling techniques\n\
                2. Ask questions to involve readers\n\
                3. Include relevant examples and case studies\n\
                4. Add visuals, images, or infographics\n\
                5. Write in a conversational tone\n\
                6. Use bullet points and short paragraphs\n\
                7. Include actionable tips\n\
                8. End with discussion questions\n\n\
                What type of content are you working on?"
            .to_string();
    }

    "I'm here to help with all aspects of blogging! I can assist with:\n\n\
     \u{2022} Writing tips and techniques\n\
     \u{2022} SEO optimization\n\
     \u{2022} Content ideas and planning\n\
     \u{2022} Improving engagement\n\
     \u{2022} Blog structure and formatting\n\
     \u{2022} Keyword research\n\
     \u{2022} Content editing and improvement\n\n\
     What would you like help with today?"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_takes_first_two_sentences_with_ellipsis() {
        assert_eq!(summary("A. B. C."), "A. B...");
    }

    #[test]
    fn summary_of_single_sentence_has_no_ellipsis() {
        assert_eq!(summary("Just one sentence"), "Just one sentence");
    }

    #[test]
    fn ideas_interpolate_topic() {
        let ideas = ideas("rust");
        assert_eq!(ideas.len(), 5);
        assert!(ideas.iter().all(|i| i.contains("rust")));
    }

    #[test]
    fn seo_echoes_title_and_truncates_content() {
        let result = seo("My Title", "Some body text");
        assert_eq!(result.optimized_title, "My Title");
        assert_eq!(result.meta_description, "Some body text...");
        assert!(result.keywords.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn chat_matches_keywords_before_generic() {
        assert!(chat("How do I improve my SEO?").contains("meta descriptions"));
        assert!(chat("give me an idea").contains("blog post ideas"));
        assert!(chat("hello there").contains("all aspects of blogging"));
    }
}
