//! Loading binary cookies files from disk.
//!
//! The whole file is read into memory before decoding.

use crate::base::context::{IoResultExt, ParseResultExt};
use crate::base::parseerror::LoadError;
use crate::cookies::container::{parse_binary_cookies, Container};
use crate::cookies::export::export_netscape;
use std::path::{Path, PathBuf};

/// Reader for a `Cookies.binarycookies` file.
pub struct BinaryCookieReader {
    path: PathBuf,
    domain: Option<String>,
}

impl BinaryCookieReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            domain: None,
        }
    }

    /// Restrict exports to cookies whose domain matches `domain`.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn domain_filter(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Load and decode the file.
    pub fn read(&self) -> Result<Container, LoadError> {
        let data = std::fs::read(&self.path).path_context(&self.path)?;
        tracing::debug!(path = %self.path.display(), bytes = data.len(), "loaded cookie file");
        parse_binary_cookies(&data).path_context(&self.path)
    }

    /// Load the file and render it as a Netscape cookie file, applying the domain filter.
    pub fn read_netscape(&self) -> Result<String, LoadError> {
        let container = self.read()?;
        Ok(export_netscape(&container, self.domain_filter()))
    }
}

/// Locations where macOS keeps Safari's cookie store.
pub fn default_safari_paths() -> Vec<PathBuf> {
    let Some(home) = std::env::var_os("HOME") else {
        return Vec::new();
    };
    let home = PathBuf::from(home);
    vec![
        home.join("Library/Containers/com.apple.Safari/Data/Library/Cookies/Cookies.binarycookies"),
        home.join("Library/Cookies/Cookies.binarycookies"),
    ]
}

/// First path among `candidates` that exists as a file.
pub fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.is_file())
}

/// Safari's cookie store on this machine, if there is one.
pub fn default_cookie_file() -> Option<PathBuf> {
    first_existing(default_safari_paths())
}
