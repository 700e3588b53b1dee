//! # Wall Shared
//!
//! Wire types shared by the API server and the client store. Both sides
//! serialize through this crate, so the JSON shape is defined exactly once.

pub mod dto;
pub mod response;

pub use response::ErrorBody;
