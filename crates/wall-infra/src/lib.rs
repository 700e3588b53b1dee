//! # Wall Infrastructure
//!
//! Concrete implementations of the ports defined in `wall-core`.
//! This crate contains the database-backed and in-memory post repositories.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//! - no features - in-memory only, nothing survives a restart

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, connect};
