//! # Wire Formats
//!
//! Fixed string formats for dates and timestamps in JSON payloads.
//!
//! ```text
//! manufacture_date / expiry_date   →  "2026-01-15"
//! created_at / updated_at          →  "2026-01-15 09:30:00"
//! missing timestamp                →  null
//! ```
//!
//! Use with serde's `with` attribute:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Batch {
//!     #[serde(with = "medvault_core::format::date")]
//!     expiry_date: NaiveDate,
//! }
//!
//! let batch = Batch { expiry_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap() };
//! assert_eq!(serde_json::to_string(&batch).unwrap(), r#"{"expiry_date":"2026-01-15"}"#);
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Calendar date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format (UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Renders a date as `YYYY-MM-DD`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// serde adapter for `NaiveDate` fields.
pub mod date {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", text)))
    }
}

/// serde adapter for `Option<DateTime<Utc>>` fields; `None` renders as `null`.
pub mod option_timestamp {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.serialize_some(&format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => parse_timestamp(&text)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", text))),
            None => Ok(None),
        }
    }
}
