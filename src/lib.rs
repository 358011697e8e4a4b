//! # binarycookies
//!
//! A decoder for Safari/WebKit `Cookies.binarycookies` files.
//!
//! `binarycookies` validates the container, walks its page and record layout,
//! and returns the cookies as structured data ready for inspection or export.
//!
//! ## Features
//!
//! - **Strict decoding**: every read is bounds-checked; any malformed field
//!   aborts the whole parse with a typed [`ParseError`](base::parseerror::ParseError)
//! - **Format fidelity**: mixed byte orders and on-disk field order preserved
//! - **Export**: JSON page array and Netscape `cookies.txt`
//! - **Summary**: per-page Secure/HttpOnly counts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binarycookies::cookies::reader::BinaryCookieReader;
//!
//! let container = BinaryCookieReader::new("Cookies.binarycookies").read()?;
//! println!("{} cookies in {} pages", container.total_cookies, container.page_count());
//! # Ok::<(), binarycookies::base::parseerror::LoadError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types and context helpers
//! - [`cookies`] - Container decoding, export and summary
//!
//! The decoder itself never prints; it emits `tracing` events that are
//! discarded unless the host installs a subscriber.

pub mod base;
pub mod cookies;

pub use base::parseerror::{LoadError, ParseError};
pub use cookies::container::{parse_binary_cookies, Container};
pub use cookies::page::Page;
pub use cookies::record::{Cookie, CookieFlags};
