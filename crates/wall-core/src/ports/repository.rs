use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostQuery};
use crate::error::RepoError;

/// Persistence contract for posts.
///
/// Implementations own row atomicity: `increment_clicks` must be a single
/// add-one at the store, never a read-modify-write in the caller, so
/// concurrent clicks on the same post all land.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts ordered by creation time descending, windowed and
    /// paginated per the query.
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist a new post.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Atomically add one to the click counter and refresh the update
    /// timestamp. Returns the post as stored afterwards.
    async fn increment_clicks(&self, id: Uuid) -> Result<Post, RepoError>;

    /// Replace a post's content and refresh the update timestamp.
    async fn update_content(&self, id: Uuid, content: &str) -> Result<Post, RepoError>;

    /// Delete a post. [`RepoError::NotFound`] when no row matches.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
