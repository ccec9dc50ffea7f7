//! URL slug derivation.

/// Derive the base slug from a post title: lowercase, runs of
/// non-alphanumeric characters collapsed to a single hyphen, no leading or
/// trailing hyphen.
///
/// A title with no alphanumeric characters at all degrades to `"post"` so the
/// stored slug is never empty.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if out.is_empty() {
        "post".to_string()
    } else {
        out
    }
}

/// Append a disambiguating suffix to a base slug.
pub fn with_suffix(base: &str, suffix: &str) -> String {
    format!("{base}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_to_single_hyphens() {
        assert_eq!(slugify("Hello World!!"), "hello-world");
        assert_eq!(slugify("Rust & Tokio: a love story"), "rust-tokio-a-love-story");
    }

    #[test]
    fn no_leading_or_trailing_hyphen() {
        assert_eq!(slugify("  --Hello--  "), "hello");
        assert_eq!(slugify("!wow!"), "wow");
    }

    #[test]
    fn empty_title_degrades_to_post() {
        assert_eq!(slugify("!!!"), "post");
        assert_eq!(slugify(""), "post");
    }

    #[test]
    fn suffix_is_appended_with_hyphen() {
        assert_eq!(with_suffix("hello-world", "a1b2c3d4"), "hello-world-a1b2c3d4");
    }
}
