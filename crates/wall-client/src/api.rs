//! The API contract the store speaks, as a port.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use wall_shared::dto::Post;

/// Errors crossing the client/server boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never completed (connect failure, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response arrived but was not the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Post API client contract.
///
/// [`crate::store::PostStore`] only sees this trait; production wires in the
/// reqwest adapter, tests wire in scripted responses.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// `GET /posts` - one page, newest first, optionally windowed to a day.
    async fn list(
        &self,
        page: u64,
        limit: u64,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Post>, ApiError>;

    /// `POST /posts` - create a note.
    async fn create(&self, content: &str, author: Option<&str>) -> Result<Post, ApiError>;

    /// `PATCH /posts/{id}` - server-side atomic click increment.
    async fn increment_click(&self, id: Uuid) -> Result<Post, ApiError>;

    /// `PUT /posts/{id}` - replace a note's content.
    async fn update(&self, id: Uuid, content: &str) -> Result<Post, ApiError>;

    /// `DELETE /posts/{id}`.
    async fn delete(&self, id: Uuid) -> Result<(), ApiError>;
}
