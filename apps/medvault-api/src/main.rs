//! # MedVault API Server
//!
//! ## Startup
//! ```text
//! .env ──► ApiConfig ──► Database (pool + migrations) ──► axum::serve
//!                                                            │
//!                                   Ctrl+C / SIGTERM ────────┘──► pool closed
//! ```

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use medvault_api::{init_tracing, router, ApiConfig, AppState};
use medvault_db::migrations::migration_status;
use medvault_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment and defaults still apply
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to read .env file: {}", e);
        }
    }

    init_tracing();

    info!("Starting MedVault API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        addr = %config.bind_address(),
        database = %config.database_path,
        "Configuration loaded"
    );

    // The SQLite file is created on connect; its directory is not
    if let Some(parent) = std::path::Path::new(&config.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    // Connect to database (runs migrations)
    let db = Database::new(config.db_config()).await?;
    match migration_status(db.pool()).await {
        Ok(status) => info!(
            applied = status.applied,
            total = status.total,
            "Database ready"
        ),
        Err(e) => warn!(error = %e, "Could not read migration status"),
    }

    let app = router(AppState::new(db.clone()));

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!(addr = %bind_addr, "HTTP server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
