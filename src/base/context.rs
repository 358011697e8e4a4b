//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! attaching the file path to I/O and parse failures as a `LoadError`.

use crate::base::parseerror::{LoadError, ParseError};
use std::io;
use std::path::Path;

/// Extension trait for adding path context to IO Results.
pub trait IoResultExt<T> {
    /// Attach the path that was being read.
    ///
    /// # Example
    /// ```ignore
    /// use binarycookies::base::context::IoResultExt;
    ///
    /// let data = std::fs::read(path).path_context(path)?;
    /// // Error: "Failed to read /tmp/Cookies.binarycookies: No such file or directory"
    /// ```
    fn path_context(self, path: &Path) -> Result<T, LoadError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn path_context(self, path: &Path) -> Result<T, LoadError> {
        self.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extension trait for adding path context to decode Results.
pub trait ParseResultExt<T> {
    fn path_context(self, path: &Path) -> Result<T, LoadError>;
}

impl<T> ParseResultExt<T> for Result<T, ParseError> {
    fn path_context(self, path: &Path) -> Result<T, LoadError> {
        self.map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
