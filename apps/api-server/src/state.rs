//! Application state - shared across all handlers.

use std::sync::Arc;

use wall_core::ports::PostRepository;
use wall_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use wall_infra::{PostgresPostRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    /// Which persistence backed this process, for the health report.
    pub backend: &'static str,
}

impl AppState {
    /// Build the application state, preferring Postgres and falling back to
    /// the in-memory repository so the server always comes up.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (posts, backend): (Arc<dyn PostRepository>, &'static str) = {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(conn) => (Arc::new(PostgresPostRepository::new(conn)), "postgres"),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryPostRepository::new()), "memory")
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Posts are held in memory only.");
                (Arc::new(InMemoryPostRepository::new()), "memory")
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (posts, backend): (Arc<dyn PostRepository>, &'static str) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - posts are held in memory only.");
            (Arc::new(InMemoryPostRepository::new()), "memory")
        };

        tracing::info!("Application state initialized");

        Self { posts, backend }
    }

    /// State over a specific repository. Used by the handler tests.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            backend: "memory",
        }
    }
}
