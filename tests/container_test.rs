mod common;

use binarycookies::cookies::container::parse_binary_cookies;
use binarycookies::cookies::record::{decode_cookie, CookieFlags};
use binarycookies::ParseError;
use common::{container_of, encode_container, encode_page, CookieFixture};
use proptest::prelude::*;

#[test]
fn test_single_cookie_roundtrip() {
    let fixture = CookieFixture::new(".example.com", "session", "/app", "abc123")
        .flags(5)
        .dates(86_400.0 * 365.0, 0.0);
    let data = container_of(&[vec![fixture]]);

    let container = parse_binary_cookies(&data).unwrap();
    assert_eq!(container.pages.len(), 1);
    assert_eq!(container.total_cookies, 1);

    let cookie = &container.pages[0].cookies[0];
    assert_eq!(cookie.domain, ".example.com");
    assert_eq!(cookie.name, "session");
    assert_eq!(cookie.path, "/app");
    assert_eq!(cookie.value, "abc123");
    assert_eq!(cookie.flags, CookieFlags::SecureHttpOnly);
    assert_eq!(cookie.created.as_str(), "Mon, 01 Jan 2001");
    assert_eq!(cookie.expires.as_str(), "Tue, 01 Jan 2002");
}

#[test]
fn test_totals_match_pages() {
    let page1 = vec![
        CookieFixture::new("a.com", "1", "/", "x"),
        CookieFixture::new("a.com", "2", "/", "y").flags(1),
        CookieFixture::new("a.com", "3", "/", "z").flags(4),
    ];
    let page2: Vec<CookieFixture> = vec![];
    let page3 = vec![CookieFixture::new("b.org", "4", "/b", "w")];
    let data = container_of(&[page1, page2, page3]);

    let container = parse_binary_cookies(&data).unwrap();
    let per_page: usize = container.pages.iter().map(|p| p.cookie_count).sum();

    assert_eq!(container.total_cookies, 4);
    assert_eq!(per_page, container.total_cookies);
    assert_eq!(container.cookies().count(), container.total_cookies);
    assert_eq!(
        container.pages.iter().map(|p| p.number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(container.pages[2].cookies[0].path, "/b");
}

#[test]
fn test_page_sizes_recorded() {
    let page1 = encode_page(&[CookieFixture::new("a.com", "n", "/", "v")]);
    let page2 = encode_page(&[
        CookieFixture::new("bb.com", "n", "/", "v"),
        CookieFixture::new("bb.com", "m", "/", "w"),
    ]);
    let data = encode_container(&[page1.clone(), page2.clone()]);

    let container = parse_binary_cookies(&data).unwrap();
    assert_eq!(container.pages[0].size, page1.len());
    assert_eq!(container.pages[1].size, page2.len());
}

#[test]
fn test_bad_magic_fails_before_page_table() {
    // Nothing but a wrong magic: any further read would be a truncation
    let err = parse_binary_cookies(b"koo\x63").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }));

    let mut data = container_of(&[vec![CookieFixture::new("a.com", "n", "/", "v")]]);
    data[0] = b'C';
    assert!(matches!(
        parse_binary_cookies(&data),
        Err(ParseError::InvalidFormat { .. })
    ));
}

#[test]
fn test_page_size_table_claims_too_much() {
    let page = encode_page(&[CookieFixture::new("a.com", "n", "/", "v")]);
    let mut data = Vec::new();
    data.extend_from_slice(b"cook");
    data.extend_from_slice(&1i32.to_be_bytes());
    data.extend_from_slice(&((page.len() + 100) as i32).to_be_bytes());
    data.extend_from_slice(&page);

    let err = parse_binary_cookies(&data).unwrap_err();
    assert_eq!(
        err,
        ParseError::TruncatedInput {
            offset: 12,
            needed: page.len() + 100,
            available: page.len()
        }
    );
}

#[test]
fn test_page_count_is_big_endian() {
    let data = container_of(&[vec![CookieFixture::new("a.com", "n", "/", "v")]]);
    // Big-endian 1; the same bytes read little-endian would be 16777216
    assert_eq!(&data[4..8], &[0, 0, 0, 1]);
    assert_eq!(parse_binary_cookies(&data).unwrap().pages.len(), 1);

    // Page count written little-endian decodes as 16777216 pages
    let mut swapped = data.clone();
    swapped[4..8].copy_from_slice(&1i32.to_le_bytes());
    assert!(matches!(
        parse_binary_cookies(&swapped),
        Err(ParseError::TruncatedInput { .. })
    ));
}

#[test]
fn test_page_internals_are_little_endian() {
    let page = encode_page(&[CookieFixture::new("a.com", "n", "/", "v")]);
    // Cookie count at page offset 4
    assert_eq!(&page[4..8], &[1, 0, 0, 0]);

    let mut swapped = page.clone();
    swapped[4..8].copy_from_slice(&1i32.to_be_bytes());
    let data = encode_container(&[swapped]);
    assert!(parse_binary_cookies(&data).is_err());
}

#[test]
fn test_string_offset_backoff() {
    // Strings placed with a gap so offsets are not contiguous
    let mut record = Vec::new();
    record.extend_from_slice(&[0u8; 4]); // reserved
    record.extend_from_slice(&1i32.to_le_bytes()); // flags
    record.extend_from_slice(&[0u8; 4]); // reserved
    for offset in [60i32, 72, 80, 84] {
        record.extend_from_slice(&offset.to_le_bytes());
    }
    record.extend_from_slice(&[0u8; 8]);
    record.extend_from_slice(&0.0f64.to_le_bytes());
    record.extend_from_slice(&0.0f64.to_le_bytes());
    assert_eq!(record.len(), 52);
    record.extend_from_slice(b"\xff\xff\xff\xff"); // filler at body 52..56
    record.extend_from_slice(b"example.com\0"); // body 56 = offset 60 - 4
    record.extend_from_slice(b"token\0\xff\xff"); // body 68 = offset 72 - 4
    record.extend_from_slice(b"/\0\xff\xff"); // body 76 = offset 80 - 4
    record.extend_from_slice(b"42\0"); // body 80 = offset 84 - 4

    let cookie = decode_cookie(&record).unwrap();
    assert_eq!(cookie.domain, "example.com");
    assert_eq!(cookie.name, "token");
    assert_eq!(cookie.path, "/");
    assert_eq!(cookie.value, "42");
    assert_eq!(cookie.flags, CookieFlags::Secure);
}

#[test]
fn test_expiration_read_before_creation() {
    let fixture = CookieFixture::new("a.com", "n", "/", "v").dates(86_400.0 * 2.0, 86_400.0);
    let container = parse_binary_cookies(&container_of(&[vec![fixture]])).unwrap();
    let cookie = &container.pages[0].cookies[0];

    assert_eq!(cookie.expires.as_str(), "Wed, 03 Jan 2001");
    assert_eq!(cookie.created.as_str(), "Tue, 02 Jan 2001");
}

#[test]
fn test_expiration_past_year_9999() {
    let fixture = CookieFixture::new("a.com", "n", "/", "v").dates(252_458_553_600.0, 0.0);
    let container = parse_binary_cookies(&container_of(&[vec![fixture]])).unwrap();
    let cookie = &container.pages[0].cookies[0];

    assert_eq!(cookie.expires.as_str(), "Sun, 04 Feb 10001");
    assert_eq!(cookie.created.as_str(), "Mon, 01 Jan 2001");
}

#[test]
fn test_malformed_record_aborts_whole_parse() {
    let good = encode_page(&[CookieFixture::new("a.com", "n", "/", "v")]);
    let mut bad = encode_page(&[CookieFixture::new("b.com", "n", "/", "v")]);
    // Break the value string's terminator, which is the last byte of the page
    let last = bad.len() - 1;
    bad[last] = b'x';

    let data = encode_container(&[good, bad]);
    assert!(matches!(
        parse_binary_cookies(&data),
        Err(ParseError::MalformedString { .. })
    ));
}

#[test]
fn test_invalid_utf8_in_record() {
    let mut page = encode_page(&[CookieFixture::new("", "n", "/", "v")]);
    // Domain string is empty: its NUL sits at the start of the string area.
    // Replace the name string's first byte with an invalid UTF-8 lead byte.
    let name_pos = 4 + 4 + 4 + 4 + 56 + 1;
    assert_eq!(page[name_pos], b'n');
    page[name_pos] = 0xff;

    let data = encode_container(&[page]);
    assert!(matches!(
        parse_binary_cookies(&data),
        Err(ParseError::MalformedString {
            reason: "invalid UTF-8",
            ..
        })
    ));
}

#[test]
fn test_trailing_bytes_ignored() {
    let mut data = container_of(&[vec![CookieFixture::new("a.com", "n", "/", "v")]]);
    data.extend_from_slice(b"bplist00 trailing metadata");
    assert_eq!(parse_binary_cookies(&data).unwrap().total_cookies, 1);
}

#[test]
fn test_unicode_values() {
    let fixture = CookieFixture::new("b\u{fc}cher.example", "pr\u{e9}f", "/", "\u{2603}");
    let container = parse_binary_cookies(&container_of(&[vec![fixture]])).unwrap();
    let cookie = &container.pages[0].cookies[0];
    assert_eq!(cookie.domain, "b\u{fc}cher.example");
    assert_eq!(cookie.value, "\u{2603}");
}

proptest! {
    #[test]
    fn prop_flags_mapping_is_total(raw in any::<i32>()) {
        let expected = match raw {
            0 => CookieFlags::None,
            1 => CookieFlags::Secure,
            4 => CookieFlags::HttpOnly,
            5 => CookieFlags::SecureHttpOnly,
            _ => CookieFlags::Unknown,
        };
        let fixture = CookieFixture::new("a.com", "n", "/", "v").flags(raw);
        let container = parse_binary_cookies(&container_of(&[vec![fixture]])).unwrap();
        prop_assert_eq!(container.pages[0].cookies[0].flags, expected);
    }

    #[test]
    fn prop_cookie_counts_add_up(sizes in prop::collection::vec(0usize..5, 0..6)) {
        let pages: Vec<Vec<CookieFixture>> = sizes
            .iter()
            .map(|&n| (0..n).map(|i| CookieFixture::new("x.com", &i.to_string(), "/", "v")).collect())
            .collect();
        let container = parse_binary_cookies(&container_of(&pages)).unwrap();

        prop_assert_eq!(container.total_cookies, sizes.iter().sum::<usize>());
        prop_assert_eq!(container.cookies().count(), container.total_cookies);
        prop_assert_eq!(container.pages.len(), sizes.len());
    }
}
