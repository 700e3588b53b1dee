use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author recorded when a note is submitted without a display name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Post entity - one anonymous note on the wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Times the note has been clicked. Never negative.
    pub click_count: i64,
}

impl Post {
    /// Build a post from raw submission input, applying the boundary rules
    /// once: content must be non-empty after trimming, and a missing or
    /// blank author resolves to [`ANONYMOUS_AUTHOR`]. The post gets a fresh
    /// id, equal creation/update timestamps and a zero click counter.
    pub fn create(content: &str, author: Option<&str>) -> Result<Self, DomainError> {
        let content = resolve_content(content)?;
        let author = resolve_author(author);
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            content: content.to_owned(),
            author: author.to_owned(),
            created_at: now,
            updated_at: now,
            click_count: 0,
        })
    }
}

/// Content rule shared by create and edit: required, surrounding whitespace
/// stripped. Length is capped by the input surface, not here.
pub fn resolve_content(raw: &str) -> Result<&str, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("content is required".to_owned()));
    }
    Ok(trimmed)
}

/// Author rule: absent or blank collapses to the anonymous default, so a
/// persisted post always carries a displayable author.
pub fn resolve_author(raw: Option<&str>) -> &str {
    raw.map(str::trim)
        .filter(|author| !author.is_empty())
        .unwrap_or(ANONYMOUS_AUTHOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_trims_content_and_keeps_author() {
        let post = Post::create("  scream into the void  ", Some("alice")).unwrap();

        assert_eq!(post.content, "scream into the void");
        assert_eq!(post.author, "alice");
        assert_eq!(post.click_count, 0);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn create_defaults_missing_author_to_anonymous() {
        let post = Post::create("hello", None).unwrap();
        assert_eq!(post.author, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn create_defaults_blank_author_to_anonymous() {
        let post = Post::create("hello", Some("   ")).unwrap();
        assert_eq!(post.author, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn create_rejects_whitespace_only_content() {
        let err = Post::create("   \n\t ", Some("alice")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn author_surrounding_whitespace_is_stripped() {
        assert_eq!(resolve_author(Some("  bob  ")), "bob");
    }

    #[test]
    fn posts_get_distinct_ids() {
        let a = Post::create("one", None).unwrap();
        let b = Post::create("two", None).unwrap();
        assert_ne!(a.id, b.id);
    }
}
