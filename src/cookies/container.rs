//! Binary cookies container parser (`Cookies.binarycookies`).
//!
//! Safari and WebKit-based apps store cookies in a proprietary paged binary
//! format. This module validates the container and decodes every page.
//!
//! ## File Format
//! The file consists of:
//! 1. Header: "cook" magic + page count + page sizes (big-endian)
//! 2. Pages: back-to-back, each exactly as long as its declared size
//! 3. Footer: checksum and trailing metadata (ignored)
//!
//! ## References
//! - https://github.com/libyal/dtformats/blob/main/documentation/Safari%20Cookies.asciidoc
//! - https://github.com/als0052/BinaryCookieReader

use crate::base::parseerror::{ParseError, ParseResult};
use crate::cookies::cursor::ByteCursor;
use crate::cookies::page::{decode_page, non_negative, Page};
use crate::cookies::record::Cookie;
use serde::{Serialize, Serializer};

/// Magic number at the start of a binary cookies file ("cook" read as little-endian u32).
pub const MAGIC: u32 = 0x6b6f_6f63;

/// A fully decoded container.
///
/// Serializes as the bare array of pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Container {
    pub pages: Vec<Page>,
    pub total_cookies: usize,
}

impl Container {
    /// Iterate over every cookie, page by page.
    pub fn cookies(&self) -> impl Iterator<Item = &Cookie> {
        self.pages.iter().flat_map(|p| p.cookies.iter())
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_cookies == 0
    }
}

impl Serialize for Container {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.pages.serialize(serializer)
    }
}

/// Parse a binary cookies file.
///
/// # Arguments
/// * `data` - The raw bytes of the Cookies.binarycookies file
///
/// # Returns
/// * `Ok(container)` - Every page decoded
/// * `Err(...)` - The first failure at any layer; no partial result
pub fn parse_binary_cookies(data: &[u8]) -> ParseResult<Container> {
    let mut cursor = ByteCursor::new(data);

    let magic = cursor.read_u32_le()?;
    if magic != MAGIC {
        return Err(ParseError::invalid_format(format!(
            "bad magic {:#010x} (not a Cookies.binarycookies file)",
            magic
        )));
    }

    let num_pages = non_negative(cursor.read_i32_be()?, "page count")?;
    tracing::debug!(pages = num_pages, "reading binary cookies container");

    let page_sizes = (0..num_pages)
        .map(|_| {
            cursor
                .read_i32_be()
                .and_then(|size| non_negative(size, "page size"))
        })
        .collect::<ParseResult<Vec<usize>>>()?;

    let mut container = Container {
        pages: Vec::with_capacity(num_pages),
        total_cookies: 0,
    };

    for (index, page_size) in page_sizes.into_iter().enumerate() {
        let page_data = cursor.read_raw(page_size)?;
        let page = decode_page(page_data, index + 1)?;
        container.total_cookies += page.cookie_count;
        container.pages.push(page);
    }

    tracing::debug!(
        pages = container.pages.len(),
        cookies = container.total_cookies,
        trailing = cursor.remaining(),
        "binary cookies container decoded"
    );

    Ok(container)
}
