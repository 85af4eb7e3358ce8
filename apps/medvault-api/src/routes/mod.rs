//! # Route Handlers
//!
//! ## Endpoint Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /suppliers                  supplier::list_suppliers            │
//! │  POST   /suppliers                  supplier::create_supplier           │
//! │  GET    /medicines                  medicine::list_medicines            │
//! │  POST   /medicines                  medicine::create_medicine           │
//! │  GET    /medicines/search?q=        medicine::search_medicines          │
//! │  GET    /medicines/expiring?days=   medicine::expiring_medicines        │
//! │  GET    /medicines/{id}             medicine::get_medicine              │
//! │  PUT    /medicines/{id}             medicine::update_medicine           │
//! │  DELETE /medicines/{id}             medicine::delete_medicine           │
//! │  GET    /health                     health::health_handler              │
//! │                                                                         │
//! │  Every route is mounted twice: at the root and under /api.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod health;
pub mod medicine;
pub mod supplier;

use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::AppState;

/// Body of a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Created {
    pub message: String,
    pub id: i64,
}

/// Body of a successful update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Message {
            message: message.into(),
        }
    }
}

/// All endpoints, without state or prefix.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/suppliers",
            get(supplier::list_suppliers).post(supplier::create_supplier),
        )
        .route(
            "/medicines",
            get(medicine::list_medicines).post(medicine::create_medicine),
        )
        .route("/medicines/search", get(medicine::search_medicines))
        .route("/medicines/expiring", get(medicine::expiring_medicines))
        .route(
            "/medicines/{id}",
            get(medicine::get_medicine)
                .put(medicine::update_medicine)
                .delete(medicine::delete_medicine),
        )
        .route("/health", get(health::health_handler))
}
