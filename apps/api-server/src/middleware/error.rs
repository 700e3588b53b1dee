//! Error handling - maps domain failures onto the wire error payload.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use wall_shared::ErrorBody;

/// Application-level error type for the HTTP boundary.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => ErrorBody::new(detail.clone()),
            AppError::BadRequest(detail) => ErrorBody::new(detail.clone()),
            AppError::Internal(detail) => {
                // Detail stays in the log; the payload is generic.
                tracing::error!("Internal error: {detail}");
                ErrorBody::internal()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<wall_core::error::DomainError> for AppError {
    fn from(err: wall_core::error::DomainError) -> Self {
        match err {
            wall_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            wall_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<wall_core::error::RepoError> for AppError {
    fn from(err: wall_core::error::RepoError) -> Self {
        match err {
            wall_core::error::RepoError::NotFound => {
                AppError::NotFound("post not found".to_string())
            }
            wall_core::error::RepoError::Connection(msg) => AppError::Internal(msg),
            wall_core::error::RepoError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
