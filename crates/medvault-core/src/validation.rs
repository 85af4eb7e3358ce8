//! # Validation Module
//!
//! Turns raw request payloads into validated inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum Json)                                   │
//! │  └── Body must be a JSON object                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present (first missing one is reported)           │
//! │  ├── Numeric coercion: quantity, supplier_id → i64; price → Money      │
//! │  ├── quantity >= 0, price >= 0                                          │
//! │  └── Dates parse as YYYY-MM-DD                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                       │
//! │  └── supplier_id FOREIGN KEY (no application pre-check)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Presence is checked for every field before any coercion runs, so a body
//! missing `supplier_id` reports the missing field even if `quantity` is also
//! malformed.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::ValidationError;
use crate::format;
use crate::money::Money;
use crate::types::{MedicineInput, MedicinePayload, NewSupplier, SupplierPayload};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates a create-supplier body.
///
/// ```rust
/// use medvault_core::validation::validate_supplier;
/// use medvault_core::SupplierPayload;
///
/// let payload: SupplierPayload =
///     serde_json::from_str(r#"{"name": "MedSupply Co.", "contact": "123-456-7890"}"#).unwrap();
/// assert_eq!(validate_supplier(&payload).unwrap().name, "MedSupply Co.");
///
/// let missing: SupplierPayload = serde_json::from_str(r#"{"name": "MedSupply Co."}"#).unwrap();
/// assert!(validate_supplier(&missing).is_err());
/// ```
pub fn validate_supplier(payload: &SupplierPayload) -> ValidationResult<NewSupplier> {
    let name = require("name", payload.name())?;
    let contact = require("contact", payload.contact())?;

    Ok(NewSupplier {
        name: text_field("name", name)?,
        contact: text_field("contact", contact)?,
    })
}

/// Validates a create or full-replace medicine body.
pub fn validate_medicine(payload: &MedicinePayload) -> ValidationResult<MedicineInput> {
    let name = require("name", &payload.name)?;
    let company = require("company", &payload.company)?;
    let manufacture_date = require("manufacture_date", payload.manufacture_date())?;
    let expiry_date = require("expiry_date", payload.expiry_date())?;
    let quantity = require("quantity", &payload.quantity)?;
    let price = require("price", &payload.price)?;
    let supplier_id = require("supplier_id", &payload.supplier_id)?;

    let name = text_field("name", name)?;
    let company = text_field("company", company)?;

    let quantity = coerce_integer("quantity", quantity)?;
    let price = coerce_money("price", price)?;
    let supplier_id = coerce_integer("supplier_id", supplier_id)?;

    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(MedicineInput {
        name,
        company,
        manufacture_date: date_field("manufacture_date", manufacture_date)?,
        expiry_date: date_field("expiry_date", expiry_date)?,
        quantity,
        price,
        supplier_id,
    })
}

/// Trims a search query. An empty result means "match everything".
pub fn normalize_search_query(query: Option<&str>) -> String {
    query.map(str::trim).unwrap_or_default().to_string()
}

/// Parses the `days` parameter of the expiring-soon query.
///
/// Anything that is not an integer falls back to `default`.
pub fn parse_window_days(days: Option<&str>, default: i64) -> i64 {
    days.and_then(|d| d.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

// =============================================================================
// Field Helpers
// =============================================================================

/// Returns the value if present; `null`, blank strings and absent keys are
/// all "missing".
fn require<'a>(field: &str, value: &'a Option<Value>) -> ValidationResult<&'a Value> {
    match value {
        None | Some(Value::Null) => Err(missing(field)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(missing(field)),
        Some(v) => Ok(v),
    }
}

fn missing(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

fn text_field(field: &str, value: &Value) -> ValidationResult<String> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        _ => Err(ValidationError::WrongType {
            field: field.to_string(),
        }),
    }
}

fn date_field(field: &str, value: &Value) -> ValidationResult<NaiveDate> {
    value
        .as_str()
        .and_then(format::parse_date)
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected a date in YYYY-MM-DD format".to_string(),
        })
}

/// Coerces a JSON integer, an integral float, or an integer string.
pub fn coerce_integer(field: &str, value: &Value) -> ValidationResult<i64> {
    let invalid = || ValidationError::InvalidNumber {
        field: field.to_string(),
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(invalid()),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Coerces a JSON number or numeric string into cents.
pub fn coerce_money(field: &str, value: &Value) -> ValidationResult<Money> {
    let parsed = match value {
        Value::Number(n) => n.as_f64().and_then(Money::from_decimal),
        Value::String(s) => Money::parse_decimal(s),
        _ => None,
    };

    parsed.ok_or_else(|| ValidationError::InvalidNumber {
        field: field.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
