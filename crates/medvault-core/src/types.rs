//! # Domain Types
//!
//! Core domain types used throughout MedVault.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────┐                   │
//! │  │    Supplier     │ 1    * │       Medicine       │                   │
//! │  │  ─────────────  │◄───────│  ──────────────────  │                   │
//! │  │  id             │        │  id                  │                   │
//! │  │  name           │        │  name, company       │                   │
//! │  │  contact        │        │  manufacture_date    │                   │
//! │  └─────────────────┘        │  expiry_date         │                   │
//! │                             │  quantity, price     │                   │
//! │                             │  supplier_id (FK)    │                   │
//! │                             └──────────────────────┘                   │
//! │                                                                         │
//! │  Read models:  MedicineWithSupplier  →  ExpiringMedicine               │
//! │  Write inputs: SupplierPayload → NewSupplier                           │
//! │                MedicinePayload → MedicineInput                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payload types hold raw JSON values so that validation, not serde, decides
//! which error a malformed field produces.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format;
use crate::money::Money;

// =============================================================================
// Supplier
// =============================================================================

/// A company that supplies medicines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact: String,
    #[serde(with = "format::option_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "format::option_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw body of a create-supplier request.
///
/// Also accepts the legacy field names `supplier_name` and `contact_no`.
/// When a body carries both spellings, the current name wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub contact: Option<Value>,
    #[serde(default, rename = "supplier_name")]
    pub legacy_name: Option<Value>,
    #[serde(default, rename = "contact_no")]
    pub legacy_contact: Option<Value>,
}

impl SupplierPayload {
    pub fn name(&self) -> &Option<Value> {
        prefer(&self.name, &self.legacy_name)
    }

    pub fn contact(&self) -> &Option<Value> {
        prefer(&self.contact, &self.legacy_contact)
    }
}

/// The current field unless it is absent or `null`.
fn prefer<'a>(current: &'a Option<Value>, legacy: &'a Option<Value>) -> &'a Option<Value> {
    match current {
        None | Some(Value::Null) => legacy,
        Some(_) => current,
    }
}

/// A validated supplier ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupplier {
    pub name: String,
    pub contact: String,
}

// =============================================================================
// Medicine
// =============================================================================

/// An inventory record for one drug batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub company: String,
    #[serde(with = "format::date")]
    pub manufacture_date: NaiveDate,
    #[serde(with = "format::date")]
    pub expiry_date: NaiveDate,
    pub quantity: i64,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "price_cents"))]
    pub price: Money,
    pub supplier_id: i64,
    #[serde(with = "format::option_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "format::option_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Medicine {
    /// Whole days from `today` until expiry; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }
}

/// A medicine joined with its supplier's name and contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MedicineWithSupplier {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub medicine: Medicine,
    pub supplier_name: String,
    pub supplier_contact: String,
}

impl MedicineWithSupplier {
    /// True if `needle` occurs in the medicine name, company or supplier
    /// name. `needle` must already be lowercased.
    pub fn matches_folded(&self, needle: &str) -> bool {
        [
            &self.medicine.name,
            &self.medicine.company,
            &self.supplier_name,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A medicine inside the expiring window, annotated with days remaining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringMedicine {
    #[serde(flatten)]
    pub medicine: MedicineWithSupplier,
    pub days_until_expiry: i64,
}

impl ExpiringMedicine {
    pub fn new(medicine: MedicineWithSupplier, today: NaiveDate) -> Self {
        let days_until_expiry = medicine.medicine.days_until_expiry(today);
        ExpiringMedicine {
            medicine,
            days_until_expiry,
        }
    }
}

/// Raw body of a create or replace-medicine request.
///
/// Also accepts the legacy field names `mfg_date` and `exp_date`. When a
/// body carries both spellings, the current name wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicinePayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub company: Option<Value>,
    #[serde(default)]
    pub manufacture_date: Option<Value>,
    #[serde(default)]
    pub expiry_date: Option<Value>,
    #[serde(default, rename = "mfg_date")]
    pub legacy_manufacture_date: Option<Value>,
    #[serde(default, rename = "exp_date")]
    pub legacy_expiry_date: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub supplier_id: Option<Value>,
}

impl MedicinePayload {
    pub fn manufacture_date(&self) -> &Option<Value> {
        prefer(&self.manufacture_date, &self.legacy_manufacture_date)
    }

    pub fn expiry_date(&self) -> &Option<Value> {
        prefer(&self.expiry_date, &self.legacy_expiry_date)
    }
}

/// A validated medicine, used for both insert and full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineInput {
    pub name: String,
    pub company: String,
    pub manufacture_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub quantity: i64,
    pub price: Money,
    pub supplier_id: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
