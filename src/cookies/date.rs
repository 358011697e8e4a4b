//! Mac absolute time decoding.
//!
//! Dates are stored as little-endian `f64` seconds since 2001-01-01 00:00:00 UTC.
//! The human-readable form keeps only the calendar day, e.g. `Mon, 01 Jan 2001`.

use crate::base::parseerror::{ParseError, ParseResult};
use serde::{Serialize, Serializer};
use std::fmt;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Seconds between the Unix epoch and the Mac absolute time epoch.
pub const MAC_EPOCH_OFFSET: i64 = 978_307_200;

// The year is appended separately: `[year]` would sign years past 9999.
const DAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short], [day] [month repr:short]");

/// A decoded cookie date.
///
/// Keeps the UTC timestamp (whole seconds) next to its calendar-day text;
/// serializes as the text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieDate {
    timestamp: OffsetDateTime,
    text: String,
}

impl CookieDate {
    /// Decode 8 raw bytes of little-endian Mac absolute time.
    pub fn from_le_bytes(raw: [u8; 8]) -> ParseResult<Self> {
        Self::from_mac_absolute(f64::from_le_bytes(raw))
    }

    /// Decode seconds since 2001-01-01 UTC. Sub-second precision is floored.
    pub fn from_mac_absolute(seconds: f64) -> ParseResult<Self> {
        let unix = (seconds + MAC_EPOCH_OFFSET as f64).floor();
        if !unix.is_finite() || unix < i64::MIN as f64 || unix > i64::MAX as f64 {
            return Err(ParseError::InvalidDate { seconds });
        }

        let timestamp = OffsetDateTime::from_unix_timestamp(unix as i64)
            .map_err(|_| ParseError::InvalidDate { seconds })?;
        let day = timestamp
            .format(DAY_FORMAT)
            .map_err(|_| ParseError::InvalidDate { seconds })?;
        let text = format!("{} {:04}", day, timestamp.year());

        Ok(Self { timestamp, text })
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    pub fn unix_timestamp(&self) -> i64 {
        self.timestamp.unix_timestamp()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CookieDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for CookieDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
