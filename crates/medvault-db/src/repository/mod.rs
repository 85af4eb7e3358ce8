//! # Repository Module
//!
//! Database repository implementations for MedVault.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                          │
//! │       │  db.medicines().search("para")                                 │
//! │       ▼                                                                 │
//! │  MedicineRepository                                                    │
//! │  ├── list / get_by_id / search / expiring   (pooled reads)             │
//! │  └── insert / update / delete               (one transaction each)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Transactions
//! Every write begins a transaction, runs one statement, and commits only on
//! success. Any early return (`?`, not-found) drops the transaction, which
//! rolls it back and releases the connection.
//!
//! ## Available Repositories
//!
//! - [`SupplierRepository`](supplier::SupplierRepository) - Supplier listing and creation
//! - [`MedicineRepository`](medicine::MedicineRepository) - Medicine CRUD, search, expiry window

pub mod medicine;
pub mod supplier;
