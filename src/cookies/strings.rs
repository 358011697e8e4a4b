//! NUL-terminated strings embedded in a cookie record.

use crate::base::parseerror::{ParseError, ParseResult};

/// Size of the record length prefix that field offsets are measured past.
pub const STRING_OFFSET_ADJUST: usize = 4;

/// Read the string addressed by a record field offset.
///
/// `record` is the record body (without its length prefix). Field offsets
/// count from the start of the prefix, so the string starts at
/// `offset - 4` in `record`.
pub fn read_record_string(record: &[u8], offset: i32) -> ParseResult<String> {
    let start = usize::try_from(offset)
        .ok()
        .and_then(|o| o.checked_sub(STRING_OFFSET_ADJUST))
        .ok_or_else(|| ParseError::malformed_string(0, "offset precedes record body"))?;

    let tail = record
        .get(start..)
        .ok_or_else(|| ParseError::malformed_string(start, "offset beyond end of record"))?;
    let end = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| ParseError::malformed_string(start, "missing NUL terminator"))?;

    String::from_utf8(tail[..end].to_vec())
        .map_err(|_| ParseError::malformed_string(start, "invalid UTF-8"))
}
