//! Failure payload shared by every unsuccessful endpoint.

use serde::{Deserialize, Serialize};

/// The `{"error": "..."}` body the API answers failures with. Kept to a
/// single field so clients surface it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Generic body for failures whose detail stays server-side.
    pub fn internal() -> Self {
        Self::new("internal server error")
    }
}
