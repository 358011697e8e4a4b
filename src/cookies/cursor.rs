//! Seekable reader over an in-memory byte buffer.
//!
//! The binarycookies layout mixes byte orders: the container header and the
//! page-size table are big-endian, while everything inside a page is
//! little-endian. The cursor exposes both and callers pick explicitly.

use crate::base::parseerror::{ParseError, ParseResult};
use crate::cookies::date::CookieDate;

/// Field offsets of a cookie record, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOffsets {
    pub url: i32,
    pub name: i32,
    pub path: i32,
    pub value: i32,
}

/// Single-owner cursor over a borrowed byte slice.
///
/// Every read is bounds-checked and advances the position; a short read
/// fails with [`ParseError::TruncatedInput`] and leaves the position unchanged.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Set the absolute read position. Bounds are enforced by the next read.
    pub fn seek(&mut self, position: usize) {
        self.pos = position;
    }

    pub fn tell(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Read exactly `n` bytes.
    pub fn read_raw(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        let slice = self
            .pos
            .checked_add(n)
            .and_then(|end| self.data.get(self.pos..end))
            .ok_or_else(|| ParseError::truncated(self.pos, n, self.data.len()))?;
        self.pos += n;
        Ok(slice)
    }

    /// Read up to `n` bytes, stopping early at the end of the buffer.
    pub fn read_up_to(&mut self, n: usize) -> &'a [u8] {
        let start = self.pos.min(self.data.len());
        let end = start.saturating_add(n).min(self.data.len());
        self.pos = end;
        &self.data[start..end]
    }

    pub fn skip(&mut self, n: usize) -> ParseResult<()> {
        self.read_raw(n).map(|_| ())
    }

    fn read_array<const N: usize>(&mut self) -> ParseResult<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_raw(N)?);
        Ok(buf)
    }

    pub fn read_i32_be(&mut self) -> ParseResult<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_i32_le(&mut self) -> ParseResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> ParseResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> ParseResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_f64_le(&mut self) -> ParseResult<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    /// Read the url/name/path/value offsets of a cookie record.
    pub fn read_offsets(&mut self) -> ParseResult<FieldOffsets> {
        let raw = self.read_raw(16)?;
        let field = |i: usize| i32::from_le_bytes([raw[i], raw[i + 1], raw[i + 2], raw[i + 3]]);
        Ok(FieldOffsets {
            url: field(0),
            name: field(4),
            path: field(8),
            value: field(12),
        })
    }

    /// Read an 8-byte Mac absolute time and decode it.
    pub fn read_date_time(&mut self) -> ParseResult<CookieDate> {
        CookieDate::from_le_bytes(self.read_array()?)
    }
}
