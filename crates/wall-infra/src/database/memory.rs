//! In-memory post repository - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use wall_core::domain::{Post, PostQuery};
use wall_core::error::RepoError;
use wall_core::ports::PostRepository;

/// Post store using a simple HashMap with async RwLock.
///
/// This keeps the server bootable without a database and backs the handler
/// tests. Note: Data is lost on process restart.
///
/// Mutations hold the write lock, so the add-one of `increment_clicks` is
/// atomic with respect to concurrent callers.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let window = query.window();

        let mut posts: Vec<Post> = store
            .values()
            .filter(|post| match window {
                Some((start, end)) => post.created_at >= start && post.created_at < end,
                None => true,
            })
            .cloned()
            .collect();

        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.per_page as usize)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn increment_clicks(&self, id: Uuid) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.click_count += 1;
        post.updated_at = Utc::now();

        Ok(post.clone())
    }

    async fn update_content(&self, id: Uuid, content: &str) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.content = content.to_owned();
        post.updated_at = Utc::now();

        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::sync::Arc;

    fn note_at(content: &str, created_at: chrono::DateTime<Utc>) -> Post {
        Post {
            id: Uuid::new_v4(),
            content: content.to_owned(),
            author: "tester".to_owned(),
            created_at,
            updated_at: created_at,
            click_count: 0,
        }
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let repo = InMemoryPostRepository::new();
        let base = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        repo.create(note_at("oldest", base)).await.unwrap();
        repo.create(note_at("middle", base + Duration::minutes(1)))
            .await
            .unwrap();
        repo.create(note_at("newest", base + Duration::minutes(2)))
            .await
            .unwrap();

        let posts = repo.list(PostQuery::default()).await.unwrap();
        let contents: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();

        assert_eq!(contents, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn list_pages_with_offset_and_limit() {
        let repo = InMemoryPostRepository::new();
        let base = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        for i in 0..5 {
            repo.create(note_at(&format!("note {i}"), base + Duration::minutes(i)))
                .await
                .unwrap();
        }

        let query = PostQuery {
            page: 2,
            per_page: 2,
            day: None,
        };
        let posts = repo.list(query).await.unwrap();
        let contents: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();

        // Newest-first ordering: page 1 holds notes 4 and 3.
        assert_eq!(contents, vec!["note 2", "note 1"]);
    }

    #[tokio::test]
    async fn list_day_filter_is_half_open() {
        let repo = InMemoryPostRepository::new();

        let start_of_day = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let end_of_day = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap();
        let next_midnight = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap();

        repo.create(note_at("first second", start_of_day)).await.unwrap();
        repo.create(note_at("last second", end_of_day)).await.unwrap();
        repo.create(note_at("next day", next_midnight)).await.unwrap();

        let query = PostQuery {
            day: chrono::NaiveDate::from_ymd_opt(2024, 3, 15),
            ..PostQuery::default()
        };
        let posts = repo.list(query).await.unwrap();
        let contents: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();

        assert_eq!(contents, vec!["last second", "first second"]);
    }

    #[tokio::test]
    async fn increment_bumps_count_and_updated_at() {
        let repo = InMemoryPostRepository::new();
        let created = repo
            .create(Post::create("click me", None).unwrap())
            .await
            .unwrap();

        let updated = repo.increment_clicks(created.id).await.unwrap();

        assert_eq!(updated.click_count, 1);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn increment_unknown_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo.increment_clicks(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn concurrent_increments_all_land() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let post = repo
            .create(Post::create("popular", None).unwrap())
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..32 {
            let repo = Arc::clone(&repo);
            let id = post.id;
            handles.push(tokio::spawn(async move {
                repo.increment_clicks(id).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stored = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(stored.click_count, 32);
    }

    #[tokio::test]
    async fn update_content_replaces_text() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .create(Post::create("draft", None).unwrap())
            .await
            .unwrap();

        let updated = repo.update_content(post.id, "final").await.unwrap();

        assert_eq!(updated.content, "final");
        assert_eq!(updated.click_count, post.click_count);
    }

    #[tokio::test]
    async fn delete_removes_post() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .create(Post::create("ephemeral", None).unwrap())
            .await
            .unwrap();

        repo.delete(post.id).await.unwrap();

        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(post.id).await.unwrap_err(),
            RepoError::NotFound
        ));
    }
}
