use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Who may read a post, beyond its author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
    Followers,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Followers => "followers",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            "followers" => Ok(Visibility::Followers),
            other => Err(format!("unknown visibility '{other}'")),
        }
    }
}

/// Post entity - a markdown blog post.
///
/// The slug is derived once at creation time and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub visibility: Visibility,
    pub published: bool,
    pub tags: Vec<String>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and timestamps.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        author_id: Uuid,
        title: String,
        content: String,
        summary: Option<String>,
        visibility: Visibility,
        published: bool,
        tags: Vec<String>,
        slug: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            summary,
            visibility,
            published,
            tags,
            slug,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_round_trips_through_str() {
        for v in [Visibility::Public, Visibility::Private, Visibility::Followers] {
            assert_eq!(v.as_str().parse::<Visibility>().unwrap(), v);
        }
    }

    #[test]
    fn visibility_rejects_unknown_value() {
        assert!("friends".parse::<Visibility>().is_err());
    }
}
