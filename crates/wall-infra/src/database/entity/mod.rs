//! SeaORM entity definitions.

pub mod post;
