//! Typed error handling for the BizTime API
//!
//! Every handler returns [`ApiResult`]. Failures carry an HTTP status and a
//! human-readable message, and render to one uniform JSON body:
//!
//! ```json
//! { "error": { "message": "Company nope not found", "status": 404 }, "message": "Company nope not found" }
//! ```
//!
//! # Error Categories
//!
//! - [`ApiError::BadRequest`]: missing or empty required input (400)
//! - [`ApiError::NotFound`]: no row matches a key lookup (404)
//! - [`ApiError::Internal`]: store failures and anything uncategorized (500)
//!
//! Store-level failures are described by [`StorageError`]. Storage services
//! return `anyhow::Result`, so a `StorageError` usually travels wrapped in an
//! `anyhow::Error` and becomes [`ApiError::Internal`] at the handler boundary.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type returned by every request handler
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Required input is missing or empty
    BadRequest(String),

    /// No row matched the requested key
    NotFound(String),

    /// Unexpected failure, usually reported by the store
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        }
    }

    /// Convert to the serialized error body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                message: self.message().to_string(),
                status: self.status_code().as_u16(),
            },
            message: self.message().to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

/// Body of every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Failures reported by a storage backend
///
/// "Not found" is never a storage error: services answer lookups with
/// `Option`/`bool` and handlers decide what an empty result means.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A primary key or unique constraint rejected the write
    #[error("duplicate key value violates unique constraint on {table}: {key}")]
    UniqueViolation { table: &'static str, key: String },

    /// A foreign key constraint rejected the write
    #[error("insert or update on {table} violates foreign key constraint: {message}")]
    ForeignKeyViolation { table: &'static str, message: String },

    /// The backend failed to run the statement
    #[error("{backend} query error: {message}")]
    QueryError {
        backend: &'static str,
        message: String,
    },

    /// The in-memory tables were poisoned by a panicking writer
    #[error("failed to acquire {0} lock")]
    LockPoisoned(&'static str),
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ApiError>() {
            Ok(api_err) => api_err,
            Err(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            ApiError::Internal(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid JSON: {}", err))
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;
