//! Strict parsing of upstream responses into typed values.
//!
//! The upstream returns plain text. Anything that does not match the expected
//! shape is dropped, never an error: absence of a field leaves the caller's
//! fallback default in place.

/// SEO fields extracted from a line-prefixed upstream response. Missing
/// fields stay `None`/empty and are filled from fallback defaults by the
/// caller.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeoFields {
    pub title: Option<String>,
    pub meta: Option<String>,
    pub keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Parse a `TITLE:` / `META:` / `KEYWORDS:` / bullet-suggestion response.
/// Unrecognized lines are ignored.
pub fn seo_response(response: &str) -> SeoFields {
    let mut fields = SeoFields::default();

    for line in response.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("TITLE:") {
            let rest = rest.trim();
            if !rest.is_empty() {
                fields.title = Some(rest.to_string());
            }
        } else if let Some(rest) = line.strip_prefix("META:") {
            let rest = rest.trim();
            if !rest.is_empty() {
                fields.meta = Some(rest.to_string());
            }
        } else if let Some(rest) = line.strip_prefix("KEYWORDS:") {
            fields.keywords = rest
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
        } else if let Some(rest) = line.strip_prefix("- ") {
            let rest = rest.trim();
            if !rest.is_empty() {
                fields.suggestions.push(rest.to_string());
            }
        }
    }

    fields
}

/// Split a response into cleaned list items: one per non-empty line, list
/// markers (numbering, hyphens, bullets) stripped, capped at `limit`.
pub fn list_items(response: &str, limit: usize) -> Vec<String> {
    response
        .lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .take(limit)
        .collect()
}

/// Remove a leading `1. `, `2) `, `- `, `* ` or `• ` marker from a line.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();

    let after_digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() < line.len() {
        if let Some(rest) = after_digits
            .strip_prefix('.')
            .or_else(|| after_digits.strip_prefix(')'))
        {
            return rest.trim_start();
        }
    }

    for marker in ["- ", "* ", "\u{2022} "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim_start();
        }
    }

    line
}

/// Truncate to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seo_response_extracts_all_fields() {
        let response = "\
TITLE: Better Rust Blogging
META: Learn how to blog about Rust.
KEYWORDS: rust, blogging, async, tokio, webdev
SUGGESTIONS:
- Add internal links
- Shorten the intro
- Use subheadings";

        let fields = seo_response(response);
        assert_eq!(fields.title.as_deref(), Some("Better Rust Blogging"));
        assert_eq!(fields.meta.as_deref(), Some("Learn how to blog about Rust."));
        assert_eq!(fields.keywords.len(), 5);
        assert_eq!(fields.keywords[0], "rust");
        assert_eq!(fields.suggestions.len(), 3);
    }

    #[test]
    fn seo_response_ignores_unrecognized_lines() {
        let response = "Here is my analysis:\nTITLE: New Title\nHope that helps!";
        let fields = seo_response(response);
        assert_eq!(fields.title.as_deref(), Some("New Title"));
        assert!(fields.meta.is_none());
        assert!(fields.keywords.is_empty());
        assert!(fields.suggestions.is_empty());
    }

    #[test]
    fn seo_response_missing_keywords_yields_empty_list() {
        let fields = seo_response("TITLE: A\nMETA: B");
        assert!(fields.keywords.is_empty());
    }

    #[test]
    fn list_items_strips_markers_and_caps() {
        let response = "1. First idea\n2) Second idea\n- Third idea\n\n\u{2022} Fourth idea";
        assert_eq!(
            list_items(response, 3),
            vec!["First idea", "Second idea", "Third idea"]
        );
    }

    #[test]
    fn list_items_keeps_plain_lines() {
        assert_eq!(list_items("no markers here", 5), vec!["no markers here"]);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("ab", 10), "ab");
    }
}
