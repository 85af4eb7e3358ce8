//! Liveness check.

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Health check endpoint. Does not touch the database.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "message": "Medical Storage Management System API is running",
    }))
}
