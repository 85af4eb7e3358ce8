//! # Money Module
//!
//! Provides the `Money` type for medicine prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices arrive as JSON numbers or strings ("25.50", 25.5, 25)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Money::from_decimal / Money::parse_decimal  → rounded to cents        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  medicines.price_cents INTEGER (exact, CHECK >= 0)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Serialized back as a JSON number with two fractional digits: 25.5     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medvault_core::money::Money;
//!
//! let price = Money::parse_decimal("25.50").unwrap();
//! assert_eq!(price.cents(), 2550);
//! assert_eq!(price.to_string(), "25.50");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Stored in the database as an integer; rendered on the wire as a decimal
/// number with two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounding half away from
    /// zero to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities, and amounts that overflow `i64`
    /// cents.
    ///
    /// ```rust
    /// use medvault_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(45.75).unwrap().cents(), 4575);
    /// assert_eq!(Money::from_decimal(0.005).unwrap().cents(), 1);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Parses a decimal string such as `"25.50"` or `" 30 "`.
    pub fn parse_decimal(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().and_then(Money::from_decimal)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal amount (for serialization only).
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount)
            .ok_or_else(|| serde::de::Error::custom("price is not a finite number"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
