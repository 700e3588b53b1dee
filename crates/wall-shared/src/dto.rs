//! Data Transfer Objects - request/response types for the API.
//!
//! Field names cross the wire in camelCase; timestamps are ISO-8601 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Rows written before the counter existed may omit this field; an
    /// absent value decodes as zero so the default is resolved here once,
    /// not at every call site.
    #[serde(default)]
    pub click_count: i64,
}

/// Request to put a new note on the wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    /// Tolerates an absent field on decode; presence is enforced by the
    /// server's content rule, which answers with a structured 400.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Request to replace a note's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Post {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        Post {
            id: Uuid::nil(),
            content: "hello wall".to_owned(),
            author: "Anonymous".to_owned(),
            created_at: at,
            updated_at: at,
            click_count: 3,
        }
    }

    #[test]
    fn post_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "content", "author", "createdAt", "updatedAt", "clickCount"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(value["clickCount"], 3);
    }

    #[test]
    fn timestamps_serialize_as_iso8601_strings() {
        let value = serde_json::to_value(sample()).unwrap();
        let created = value["createdAt"].as_str().unwrap();
        assert!(created.starts_with("2024-03-15T09:30:00"));
    }

    #[test]
    fn missing_click_count_decodes_as_zero() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "content": "old row",
            "author": "Anonymous",
            "createdAt": "2024-03-15T09:30:00Z",
            "updatedAt": "2024-03-15T09:30:00Z",
        }))
        .unwrap();

        assert_eq!(post.click_count, 0);
    }

    #[test]
    fn create_request_omits_absent_author() {
        let body = serde_json::to_value(CreatePostRequest {
            content: "hi".to_owned(),
            author: None,
        })
        .unwrap();

        assert!(body.as_object().unwrap().get("author").is_none());
    }
}
