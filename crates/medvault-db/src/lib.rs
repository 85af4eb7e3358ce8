//! # medvault-db: Database Layer for MedVault
//!
//! Database access for the MedVault inventory service: SQLite via sqlx,
//! embedded migrations, and one repository per table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MedVault Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (GET /medicines/search?q=para)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    medvault-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐ │   │
//! │  │   │   Database    │    │    Repositories    │  │ Migrations │ │   │
//! │  │   │   (pool.rs)   │◄───│ SupplierRepository │  │ (embedded) │ │   │
//! │  │   │  SqlitePool   │    │ MedicineRepository │  │ 001_init   │ │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (./data/medvault.db by default)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (supplier, medicine)
//! - [`seed`] - Sample inventory for development databases
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medvault_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./data/medvault.db")).await?;
//! let medicines = db.medicines().search("para").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::medicine::MedicineRepository;
pub use repository::supplier::SupplierRepository;
