//! # Wall Client
//!
//! The client half of Wailing Wall: a post store that fetches, caches and
//! optimistically mutates wall state over the HTTP API, plus the local
//! identity (display name) provider.
//!
//! The store never talks HTTP directly - it goes through the [`api::PostApi`]
//! port, implemented by [`http::HttpPostApi`] in production and by scripted
//! fakes in tests.

pub mod api;
pub mod http;
pub mod identity;
pub mod notify;
pub mod store;

pub use api::{ApiError, PostApi};
pub use http::HttpPostApi;
pub use identity::Identity;
pub use store::PostStore;
