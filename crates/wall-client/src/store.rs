//! Client-held wall state, synchronized with the API.
//!
//! The cached list is transient and possibly stale; it is replaced by
//! fetches, extended by load-more, and nudged by optimistic mutations that
//! reconcile against whatever the server answers.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use wall_shared::dto::Post;

use crate::api::{ApiError, PostApi};
use crate::notify::Notifier;

/// Page size the wall requests. A page shorter than this means the wall is
/// exhausted; a full page means another fetch is worth trying.
const PAGE_SIZE: u64 = 20;

/// Client-side post store.
///
/// Holds one page-stitched list of posts plus the loading flags a UI binds
/// to. All mutations go through the API first or reconcile with it after;
/// on failure the local state is restored, so the list never drifts
/// permanently from the server.
pub struct PostStore {
    api: Arc<dyn PostApi>,
    notifier: Arc<dyn Notifier>,
    posts: Vec<Post>,
    is_loading: bool,
    is_loading_more: bool,
    is_creating: bool,
    has_more: bool,
    current_page: u64,
    /// Posts with a click increment currently on the wire. Repeat clicks on
    /// these are dropped until the in-flight request settles.
    in_flight_clicks: HashSet<Uuid>,
}

impl PostStore {
    pub fn new(api: Arc<dyn PostApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            posts: Vec::new(),
            is_loading: false,
            is_loading_more: false,
            is_creating: false,
            has_more: true,
            current_page: 1,
            in_flight_clicks: HashSet::new(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    pub fn is_creating(&self) -> bool {
        self.is_creating
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Load one page from the server. `append` stitches the page onto the
    /// cached list (load-more); otherwise the list is replaced (initial
    /// load or filter change). On failure the previous list, page cursor
    /// and `has_more` are all kept untouched.
    pub async fn fetch(&mut self, page: u64, day: Option<NaiveDate>, append: bool) {
        if append {
            self.is_loading_more = true;
        } else {
            self.is_loading = true;
        }

        match self.api.list(page, PAGE_SIZE, day).await {
            Ok(rows) => {
                let full_page = rows.len() as u64 == PAGE_SIZE;

                if append {
                    self.posts.extend(rows);
                } else {
                    self.posts = rows;
                }
                self.has_more = full_page;
                self.current_page = page;
            }
            Err(err) => {
                tracing::debug!(error = %err, page, "post list fetch failed");
                self.notifier.error("Error loading posts");
            }
        }

        if append {
            self.is_loading_more = false;
        } else {
            self.is_loading = false;
        }
    }

    /// Initial load, or a reload after the day filter changes.
    pub async fn refresh(&mut self, day: Option<NaiveDate>) {
        self.fetch(1, day, false).await;
    }

    /// Fetch the page after the current one and append it. Does nothing
    /// while a fetch is already running or once the wall is exhausted.
    pub async fn load_more(&mut self, day: Option<NaiveDate>) {
        if self.is_loading || self.is_loading_more || !self.has_more {
            return;
        }

        self.fetch(self.current_page + 1, day, true).await;
    }

    /// Submit a note. The created post is prepended locally so the author
    /// sees it immediately without a refetch. Returns `None` on failure,
    /// leaving the list untouched.
    pub async fn create_post(&mut self, content: &str, author: Option<&str>) -> Option<Post> {
        self.is_creating = true;
        let result = self.api.create(content, author).await;
        self.is_creating = false;

        match result {
            Ok(post) => {
                self.posts.insert(0, post.clone());
                self.notifier.success("Post created successfully!");
                Some(post)
            }
            Err(err) => {
                let message = match &err {
                    ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
                    _ => "Error creating post".to_owned(),
                };
                tracing::debug!(error = %err, "post create failed");
                self.notifier.error(&message);
                None
            }
        }
    }

    /// Optimistically add one to a post's local counter and mark the post
    /// in flight.
    ///
    /// Returns `false`, changing nothing, when the post is unknown locally
    /// or already has an increment on the wire - rapid repeat clicks
    /// collapse into a single request.
    pub fn begin_click(&mut self, id: Uuid) -> bool {
        if self.in_flight_clicks.contains(&id) {
            return false;
        }

        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        post.click_count += 1;
        self.in_flight_clicks.insert(id);
        true
    }

    /// Settle the in-flight increment for `id`: adopt the server's count on
    /// success (the server is authoritative, even when it disagrees with
    /// the optimistic value), roll the local increment back on failure,
    /// never below zero.
    pub fn settle_click(&mut self, id: Uuid, result: Result<Post, ApiError>) {
        self.in_flight_clicks.remove(&id);

        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return;
        };

        match result {
            Ok(updated) => {
                post.click_count = updated.click_count;
            }
            Err(err) => {
                tracing::debug!(error = %err, %id, "click increment failed, rolling back");
                post.click_count = (post.click_count - 1).max(0);
            }
        }
    }

    /// Record a click on a note: local increment first so the UI responds
    /// instantly, then reconcile with the server. Returns `false` when the
    /// click was dropped by the in-flight guard.
    pub async fn increment_click(&mut self, id: Uuid) -> bool {
        if !self.begin_click(id) {
            return false;
        }

        let result = self.api.increment_click(id).await;
        self.settle_click(id, result);
        true
    }

    /// Replace a note's content server-side and mirror the result locally.
    pub async fn update_post(&mut self, id: Uuid, content: &str) -> Option<Post> {
        match self.api.update(id, content).await {
            Ok(updated) => {
                if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
                    *post = updated.clone();
                }
                self.notifier.success("Post updated");
                Some(updated)
            }
            Err(err) => {
                tracing::debug!(error = %err, %id, "post update failed");
                self.notifier.error("Error updating post");
                None
            }
        }
    }

    /// Delete a note server-side and drop it from the local list.
    pub async fn delete_post(&mut self, id: Uuid) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                self.posts.retain(|p| p.id != id);
                self.notifier.success("Post deleted");
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, %id, "post delete failed");
                self.notifier.error("Error deleting post");
                false
            }
        }
    }
}
