//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MedVault                               │
//! │                                                                         │
//! │  Handler: Result<T, ApiError>                                          │
//! │         │                                                               │
//! │         ├── ValidationError / bad JSON body ──────► 400                │
//! │         ├── CoreError::MedicineNotFound ──────────► 404                │
//! │         ├── DbError::NotFound ────────────────────► 404                │
//! │         └── any other DbError ──── logged ────────► 500 (generic)      │
//! │                                                                         │
//! │  Body: {"error": "<message>"}                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Database details never reach the client; they are written to the log and
//! replaced by a fixed message.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medvault_core::{CoreError, ValidationError};
use medvault_db::DbError;
use serde_json::json;

/// Error returned from route handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// { "error": "Missing required field: company" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status of the response
    pub status: StatusCode,

    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, format!("{} not found", resource))
    }

    /// Creates a validation error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a generic persistence failure.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, .. } => ApiError::not_found(&entity),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::internal("Database connection failed")
            }
            DbError::PoolExhausted => {
                tracing::error!("Database pool exhausted");
                ApiError::internal("Database connection failed")
            }
            DbError::ForeignKeyViolation { message } => {
                // Unknown supplier_id, or a supplier that still has medicines
                tracing::error!("Foreign key violation: {}", message);
                ApiError::internal("Database operation failed")
            }
            other => {
                tracing::error!("Database operation failed: {}", other);
                ApiError::internal("Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MedicineNotFound(_) => ApiError::not_found("Medicine"),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

/// Any body that is not a JSON object of the expected shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        ApiError::bad_request("Invalid JSON body")
    }
}

/// A query string that cannot be decoded.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected query string");
        ApiError::bad_request("Invalid query string")
    }
}

/// A path id that is not an integer names no resource.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected path parameter");
        ApiError::not_found("Resource")
    }
}
