use std::path::PathBuf;
use thiserror::Error;

/// Failure while decoding a `Cookies.binarycookies` container.
///
/// Every variant is fatal: the decoder never returns a partial container.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The buffer is not a binary cookies container, or a layout field holds
    /// a value that cannot describe a valid layout (e.g. a negative length).
    #[error("Invalid binarycookies format: {reason}")]
    InvalidFormat { reason: String },

    /// A fixed-width read needed more bytes than remain in the buffer.
    #[error("Truncated input at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A record string has no NUL terminator, is out of bounds, or is not UTF-8.
    #[error("Malformed string at offset {offset}: {reason}")]
    MalformedString { offset: usize, reason: &'static str },

    /// A date field cannot be placed on the calendar.
    #[error("Invalid date value: {seconds} seconds since 2001-01-01")]
    InvalidDate { seconds: f64 },
}

impl ParseError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        ParseError::InvalidFormat {
            reason: reason.into(),
        }
    }

    pub fn truncated(offset: usize, needed: usize, len: usize) -> Self {
        ParseError::TruncatedInput {
            offset,
            needed,
            available: len.saturating_sub(offset),
        }
    }

    pub fn malformed_string(offset: usize, reason: &'static str) -> Self {
        ParseError::MalformedString { offset, reason }
    }

    /// Short, stable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::InvalidFormat { .. } => "InvalidFormat",
            ParseError::TruncatedInput { .. } => "TruncatedInput",
            ParseError::MalformedString { .. } => "MalformedString",
            ParseError::InvalidDate { .. } => "InvalidDate",
        }
    }
}

/// Failure while loading a container from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// The underlying parse failure, if decoding (not I/O) failed.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Io { .. } => None,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
