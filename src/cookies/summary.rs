//! Per-page summary of a decoded container.
//!
//! Counts the cookies on each page that carry Secure and/or HttpOnly, for
//! a quick overview before exporting.

use crate::cookies::container::Container;
use crate::cookies::page::Page;
use crate::cookies::record::CookieFlags;

/// Domain column value for a page with no cookies.
pub const NO_COOKIES: &str = "No Important Cookies";

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub number: usize,
    pub size: usize,
    pub domain: String,
    pub cookie_count: usize,
    /// Flag counts in first-seen order; only Secure/HttpOnly combinations.
    pub flag_counts: Vec<(CookieFlags, usize)>,
}

impl PageSummary {
    pub fn from_page(page: &Page) -> Self {
        let mut flag_counts: Vec<(CookieFlags, usize)> = Vec::new();
        for cookie in &page.cookies {
            if !matches!(
                cookie.flags,
                CookieFlags::Secure | CookieFlags::HttpOnly | CookieFlags::SecureHttpOnly
            ) {
                continue;
            }
            match flag_counts.iter_mut().find(|(f, _)| *f == cookie.flags) {
                Some((_, n)) => *n += 1,
                None => flag_counts.push((cookie.flags, 1)),
            }
        }

        Self {
            number: page.number,
            size: page.size,
            domain: page.first_domain().unwrap_or(NO_COOKIES).to_string(),
            cookie_count: page.cookie_count,
            flag_counts,
        }
    }

    /// e.g. `Secure (3), HttpOnly (2)`, or `N/A` when no flagged cookies.
    pub fn flags_display(&self) -> String {
        if self.flag_counts.is_empty() {
            return "N/A".to_string();
        }
        self.flag_counts
            .iter()
            .map(|(flag, n)| format!("{} ({})", flag, n))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn summarize(container: &Container) -> Vec<PageSummary> {
    container.pages.iter().map(PageSummary::from_page).collect()
}

/// Render summary rows as a grid table.
pub fn render_table(rows: &[PageSummary]) -> String {
    const HEADERS: [&str; 5] = [
        "Page Number",
        "Size (bytes)",
        "Domain",
        "Number of Cookies",
        "Flags",
    ];

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.number.to_string(),
                r.size.to_string(),
                r.domain.clone(),
                r.cookie_count.to_string(),
                r.flags_display(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let border = |fill: char| {
        let mut line = String::from("+");
        for w in widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };
    let row_line = |row: &[&str]| {
        let mut line = String::from("|");
        for (cell, w) in row.iter().zip(widths) {
            line.push_str(&format!(" {:<width$} |", cell, width = w));
        }
        line
    };

    let mut out = vec![border('-'), row_line(&HEADERS[..]), border('=')];
    for row in &cells {
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(row_line(&refs[..]));
        out.push(border('-'));
    }
    if cells.is_empty() {
        out.pop();
        out.push(border('-'));
    }
    out.join("\n")
}
