//! # medvault-core: Pure Domain Logic for MedVault
//!
//! Everything the inventory service knows about suppliers and medicines that
//! does not need a database or a socket lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MedVault Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/medvault-api (axum)                        │   │
//! │  │   GET/POST /suppliers  •  /medicines CRUD  •  search/expiring  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ medvault-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  format   │  │   │
//! │  │   │ Supplier  │  │   Money   │  │ payloads  │  │ dates     │  │   │
//! │  │   │ Medicine  │  │ (cents)   │  │ coercion  │  │ timestamps│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 medvault-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Supplier, Medicine, read models)
//! - [`money`] - Money type with integer cents
//! - [`error`] - Domain error types
//! - [`validation`] - Payload validation and numeric coercion
//! - [`format`] - Wire formats for dates and timestamps
//!
//! ## Example Usage
//!
//! ```rust
//! use medvault_core::validation::validate_medicine;
//! use medvault_core::MedicinePayload;
//!
//! let payload: MedicinePayload = serde_json::from_value(serde_json::json!({
//!     "name": "Paracetamol 500mg",
//!     "company": "PharmaCorp",
//!     "manufacture_date": "2024-01-15",
//!     "expiry_date": "2026-01-15",
//!     "quantity": 500,
//!     "price": 25.5,
//!     "supplier_id": 1
//! }))
//! .unwrap();
//!
//! let input = validate_medicine(&payload).unwrap();
//! assert_eq!(input.price.cents(), 2550);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default look-ahead window for the expiring-soon query, in days.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;
