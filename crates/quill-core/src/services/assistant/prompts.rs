//! Prompt construction for the assistant operations.
//!
//! Long post bodies are truncated before interpolation; the upstream model
//! does not need the full text to suggest keywords or SEO changes.

use super::parse::truncate_chars;

const KEYWORD_CONTENT_CHARS: usize = 500;
const SEO_CONTENT_CHARS: usize = 800;

pub fn summary(content: &str) -> String {
    format!(
        "Please create a concise, engaging summary of the following blog post \
         content. The summary should be 2-3 sentences long and capture the main \
         points and value proposition.\n\nBlog content:\n{content}\n\nSummary:"
    )
}

pub fn ideas(topic: &str, count: usize) -> String {
    format!(
        "Generate {count} creative and engaging blog post ideas about \"{topic}\". \
         Each idea should be specific, actionable, and appealing to readers. \
         Format as a numbered list."
    )
}

pub fn improve(content: &str, instruction: &str) -> String {
    format!(
        "Please improve the following blog content based on this request: \
         \"{instruction}\". Make it more engaging, professional, and \
         well-structured while maintaining the original meaning.\n\n\
         Original content:\n{content}\n\nImproved content:"
    )
}

pub fn keywords(title: &str, content: &str) -> String {
    format!(
        "Based on this blog post title and content, suggest 10 relevant SEO \
         keywords that would help with search engine optimization. Return only \
         the keywords, one per line.\n\nTitle: {title}\nContent: {}...\n\nKeywords:",
        truncate_chars(content, KEYWORD_CONTENT_CHARS)
    )
}

pub fn seo(title: &str, content: &str) -> String {
    format!(
        "Analyze this blog post and provide SEO optimization suggestions:\n\n\
         Title: {title}\nContent: {}...\n\n\
         Please provide:\n\
         1. An optimized title (50-60 characters)\n\
         2. A meta description (150-160 characters)\n\
         3. 5 primary keywords\n\
         4. 3 SEO improvement suggestions\n\n\
         Format your response as:\n\
         TITLE: [optimized title]\n\
         META: [meta description]\n\
         KEYWORDS: [keyword1, keyword2, keyword3, keyword4, keyword5]\n\
         SUGGESTIONS:\n\
         - [suggestion 1]\n\
         - [suggestion 2]\n\
         - [suggestion 3]",
        truncate_chars(content, SEO_CONTENT_CHARS)
    )
}

pub fn chat(message: &str, context: Option<&str>) -> String {
    let context_block = context
        .map(|c| format!("Context: {c}\n\n"))
        .unwrap_or_default();
    format!(
        "You are an AI writing assistant for a blogging platform. Help users \
         with writing, editing, SEO, content ideas, and blogging best practices. \
         Be helpful, friendly, and informative.\n\n\
         {context_block}User message: {message}\n\nResponse:"
    )
}
