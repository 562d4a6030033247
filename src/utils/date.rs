//! Date helpers for post front matter.

use chrono::NaiveDate;

/// Parse a `publishedAt` value.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time part
/// (`2024-04-09T10:00:00`), which is ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format a date for display, e.g. `April 9, 2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
