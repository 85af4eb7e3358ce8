//! # Error Types
//!
//! Domain-specific error types for medvault-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  medvault-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures (HTTP 400)           │
//! │                                                                         │
//! │  medvault-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  medvault-api errors                                                   │
//! │  └── ApiError         - What HTTP clients see ({"error": "..."})       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → JSON response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Medicine cannot be found.
    ///
    /// ## When This Occurs
    /// - Fetch, update or delete with an id that has no row
    /// - The row was deleted between list and fetch
    #[error("Medicine not found: {0}")]
    MedicineNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any SQL runs, so a validation failure never leaves a partial
/// write behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing, null, or blank.
    #[error("Missing required field: {field}")]
    Required { field: String },

    /// A numeric field could not be coerced to a number.
    #[error("Invalid numeric value for {field}")]
    InvalidNumber { field: String },

    /// A numeric field is below zero.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. a date that is not YYYY-MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A text field received a non-string JSON value.
    #[error("{field} must be a string")]
    WrongType { field: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidNumber { field }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::WrongType { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
