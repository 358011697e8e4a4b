//! Binary cookies decoding and export.
//!
//! This module decodes Safari/WebKit `Cookies.binarycookies` containers:
//!
//! - **Decoding**: container, page and record layers over a bounds-checked cursor
//! - **Dates**: Mac absolute time to calendar-day strings
//! - **Export**: JSON page array and Netscape `cookies.txt`
//! - **Summary**: per-page counts of Secure/HttpOnly cookies
//!
//! # Architecture
//!
//! Each layer gets its own cursor over the slice it owns, so offsets never
//! leak between nesting levels:
//!
//! | Layer | Module | Byte order |
//! |-------|--------|------------|
//! | Container header, page sizes | [`container`] | big-endian |
//! | Page header, offset table | [`page`] | little-endian |
//! | Cookie record | [`record`] | little-endian |
//! | Record strings | [`strings`] | NUL-terminated UTF-8 |
//!
//! # Decoding a file
//!
//! ```rust,no_run
//! use binarycookies::cookies::reader::BinaryCookieReader;
//!
//! let container = BinaryCookieReader::new("Cookies.binarycookies").read()?;
//! for cookie in container.cookies() {
//!     println!("{} {}={} ({})", cookie.domain, cookie.name, cookie.value, cookie.expires);
//! }
//! # Ok::<(), binarycookies::base::parseerror::LoadError>(())
//! ```
//!
//! # Decoding a buffer
//!
//! ```rust
//! use binarycookies::cookies::container::parse_binary_cookies;
//!
//! let container = parse_binary_cookies(b"cook\x00\x00\x00\x00")?;
//! assert_eq!(container.total_cookies, 0);
//! # Ok::<(), binarycookies::base::parseerror::ParseError>(())
//! ```

pub mod container;
pub mod cursor;
pub mod date;
pub mod export;
pub mod page;
pub mod reader;
pub mod record;
pub mod strings;
pub mod summary;
