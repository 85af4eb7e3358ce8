//! # MedVault API
//!
//! HTTP/JSON server for the medical-supply inventory.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         MedVault API                                    │
//! │                                                                         │
//! │  Client ──► axum Router ──► routes::* ──► medvault-db ──► SQLite       │
//! │                 │               │                                       │
//! │                 │               └── medvault-core (validation)          │
//! │                 │                                                       │
//! │                 └── ApiError ──► {"error": "..."}                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (a `.env` file is read first when present):
//! - `API_HOST` - Bind host (default: 0.0.0.0)
//! - `API_PORT` - HTTP port (default: 5000)
//! - `DATABASE_PATH` - SQLite file (default: ./data/medvault.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT_SECS` - Pool acquire timeout (default: 30)
//! - `RUST_LOG` - Log filter (default: info,medvault=debug,sqlx=warn)

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use medvault_db::Database;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the application router.
///
/// Routes are served both at the root and under `/api`. Cross-origin requests
/// are allowed from any origin so a browser frontend on another port can call
/// the API.
pub fn router(state: AppState) -> Router {
    let routes = routes::routes();

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,medvault=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
