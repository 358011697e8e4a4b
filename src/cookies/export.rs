//! Export of decoded containers.
//!
//! Two interchange formats:
//! - JSON: the page array, one object per page with its cookies
//! - Netscape cookie file: the `cookies.txt` format read by curl and wget

use crate::cookies::container::Container;
use crate::cookies::record::Cookie;
use std::fs;
use std::io;
use std::path::Path;

/// Serialize the container as pretty JSON with 4-space indentation.
#[cfg(feature = "json")]
pub fn to_json(container: &Container) -> serde_json::Result<String> {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    container.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the JSON export to `path`.
#[cfg(feature = "json")]
pub fn save_json(container: &Container, path: &Path) -> io::Result<()> {
    let json = to_json(container).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// Tabs and line breaks would split a `cookies.txt` line.
fn has_field_separator(cookie: &Cookie) -> bool {
    [&cookie.domain, &cookie.path, &cookie.name, &cookie.value]
        .iter()
        .any(|field| field.contains(['\t', '\n', '\r']))
}

fn matches_domain(cookie: &Cookie, filter: Option<&str>) -> bool {
    match filter {
        Some(filter) => cookie.domain.contains(filter),
        None => true,
    }
}

/// Export cookies to Netscape cookie format.
///
/// Each line has the format:
/// `domain\tinclude_subdomains\tpath\tsecure\texpiry\tname\tvalue`
///
/// # Example
/// ```rust,no_run
/// use binarycookies::cookies::{container::parse_binary_cookies, export::export_netscape};
///
/// let data = std::fs::read("Cookies.binarycookies")?;
/// let container = parse_binary_cookies(&data)?;
/// std::fs::write("cookies.txt", export_netscape(&container, None))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn export_netscape(container: &Container, domain_filter: Option<&str>) -> String {
    let mut lines = vec![
        "# Netscape HTTP Cookie File".to_string(),
        "# https://curl.se/docs/http-cookies.html".to_string(),
        "# This file was generated by binarycookies".to_string(),
        String::new(),
    ];

    for cookie in container.cookies() {
        if !matches_domain(cookie, domain_filter) {
            continue;
        }
        if has_field_separator(cookie) {
            tracing::warn!(
                domain = %cookie.domain,
                name = %cookie.name,
                "skipping cookie with tab or newline in a field"
            );
            continue;
        }

        let include_subdomains = if cookie.domain.starts_with('.') {
            "TRUE"
        } else {
            "FALSE"
        };
        let secure = if cookie.flags.is_secure() { "TRUE" } else { "FALSE" };

        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            cookie.domain,
            include_subdomains,
            cookie.path,
            secure,
            cookie.expires.unix_timestamp(),
            cookie.name,
            cookie.value
        ));
    }

    lines.join("\n")
}

/// Write the Netscape export to `path`.
pub fn save_netscape(
    container: &Container,
    path: &Path,
    domain_filter: Option<&str>,
) -> io::Result<()> {
    fs::write(path, export_netscape(container, domain_filter))
}
