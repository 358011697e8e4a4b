//! Page decoding.
//!
//! A page is a little-endian block: header (skipped), cookie count, one
//! offset per cookie (relative to the page start), footer (skipped), then the
//! cookie records addressed by those offsets.

use crate::base::parseerror::{ParseError, ParseResult};
use crate::cookies::cursor::ByteCursor;
use crate::cookies::record::{decode_cookie, Cookie};
use serde::Serialize;

/// One decoded page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based position in the container.
    #[serde(rename = "Page Num")]
    pub number: usize,
    /// Declared size in bytes.
    #[serde(rename = "Size")]
    pub size: usize,
    #[serde(rename = "# of Cookies")]
    pub cookie_count: usize,
    /// Records in offset-table order.
    #[serde(rename = "Cookie Data")]
    pub cookies: Vec<Cookie>,
}

impl Page {
    pub fn first_domain(&self) -> Option<&str> {
        self.cookies.first().map(|c| c.domain.as_str())
    }
}

/// Convert a signed layout field to a length, rejecting negative values.
pub(crate) fn non_negative(value: i32, what: &str) -> ParseResult<usize> {
    usize::try_from(value)
        .map_err(|_| ParseError::invalid_format(format!("negative {}: {}", what, value)))
}

/// Decode one page from its raw bytes.
pub fn decode_page(data: &[u8], number: usize) -> ParseResult<Page> {
    let mut cursor = ByteCursor::new(data);

    cursor.skip(4)?;
    let cookie_count = non_negative(cursor.read_i32_le()?, "cookie count")?;

    let offsets = (0..cookie_count)
        .map(|_| {
            cursor
                .read_i32_le()
                .and_then(|o| non_negative(o, "cookie offset"))
        })
        .collect::<ParseResult<Vec<usize>>>()?;

    cursor.skip(4)?;

    let mut cookies = Vec::with_capacity(cookie_count);
    for offset in offsets {
        cursor.seek(offset);
        let record_len = non_negative(cursor.read_i32_le()?, "cookie record length")?;
        // The stored length counts its own prefix, so the body can run past
        // the last record of a page; clip it to the page end.
        let record = cursor.read_up_to(record_len);
        cookies.push(decode_cookie(record)?);
    }

    let page = Page {
        number,
        size: data.len(),
        cookie_count,
        cookies,
    };

    tracing::debug!(
        page = number,
        size = page.size,
        cookies = cookie_count,
        domain = page.first_domain().unwrap_or("No cookies"),
        "decoded page"
    );

    Ok(page)
}
