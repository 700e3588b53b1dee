//! Domain entities - the core business objects.

mod post;
mod query;

pub use post::{ANONYMOUS_AUTHOR, Post, resolve_author, resolve_content};
pub use query::{DEFAULT_PAGE_SIZE, PostQuery, day_window};
