//! Cookie record decoding.
//!
//! ## Record body layout
//! (after the 4-byte length prefix; integers little-endian)
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0  | 4  | reserved |
//! | 4  | 4  | flags |
//! | 8  | 4  | reserved |
//! | 12 | 16 | url, name, path, value offsets |
//! | 28 | 8  | reserved |
//! | 36 | 8  | expiration date |
//! | 44 | 8  | creation date |
//! | 52 | .. | NUL-terminated strings |
//!
//! Expiration is stored before creation.

use crate::base::parseerror::ParseResult;
use crate::cookies::cursor::ByteCursor;
use crate::cookies::date::CookieDate;
use crate::cookies::strings::read_record_string;
use serde::{Serialize, Serializer};
use std::fmt;

/// Bytes of fixed-width fields at the start of a record body.
pub const RECORD_HEADER_LEN: usize = 52;

/// Cookie attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookieFlags {
    None,
    Secure,
    HttpOnly,
    SecureHttpOnly,
    /// Any bit pattern outside the known combinations.
    Unknown,
}

impl CookieFlags {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => CookieFlags::None,
            1 => CookieFlags::Secure,
            4 => CookieFlags::HttpOnly,
            5 => CookieFlags::SecureHttpOnly,
            _ => CookieFlags::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CookieFlags::None => "",
            CookieFlags::Secure => "Secure",
            CookieFlags::HttpOnly => "HttpOnly",
            CookieFlags::SecureHttpOnly => "Secure; HttpOnly",
            CookieFlags::Unknown => "Unknown",
        }
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, CookieFlags::Secure | CookieFlags::SecureHttpOnly)
    }

    pub fn is_http_only(&self) -> bool {
        matches!(self, CookieFlags::HttpOnly | CookieFlags::SecureHttpOnly)
    }
}

impl fmt::Display for CookieFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CookieFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One decoded cookie record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cookie {
    pub domain: String,
    pub name: String,
    pub path: String,
    pub value: String,
    pub created: CookieDate,
    pub expires: CookieDate,
    pub flags: CookieFlags,
}

/// Decode one record body.
pub fn decode_cookie(record: &[u8]) -> ParseResult<Cookie> {
    let mut cursor = ByteCursor::new(record);

    cursor.skip(4)?;
    let flags = CookieFlags::from_raw(cursor.read_i32_le()?);
    cursor.skip(4)?;

    let offsets = cursor.read_offsets()?;

    // End-of-header marker, unused
    let _ = cursor.read_u64_le()?;

    let expires = cursor.read_date_time()?;
    let created = cursor.read_date_time()?;

    let domain = read_record_string(record, offsets.url)?;
    let name = read_record_string(record, offsets.name)?;
    let path = read_record_string(record, offsets.path)?;
    let value = read_record_string(record, offsets.value)?;

    tracing::trace!(domain = %domain, name = %name, flags = %flags, "decoded cookie");

    Ok(Cookie {
        domain,
        name,
        path,
        value,
        created,
        expires,
        flags,
    })
}
