//! Best-effort parsing of the date formats the upstream sites publish.
//!
//! Sources give ISO dates (with or without a time), `dd.mm.yyyy`, or
//! Norwegian free text such as `13. november 2025 kl. 18:00`. Every parser
//! here is total: any input yields `Some(date)` or `None`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Norwegian month names, indexed by month number minus one.
pub const NORWEGIAN_MONTHS: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

static DOTTED_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})(?:\s|$)").expect("valid dotted date pattern"));

const ISO_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse `text` into a calendar date, trying ISO 8601, a `YYYY-MM-DD`
/// prefix, `d.m.yyyy`, then `<day>. <month name> <year>`.
pub fn normalize_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    parse_iso(text)
        .or_else(|| parse_iso_prefix(text))
        .or_else(|| parse_dotted(text))
        .or_else(|| parse_norwegian_text(text))
}

/// Same as [`normalize_date`] for optional input.
pub fn normalize_opt(text: Option<&str>) -> Option<NaiveDate> {
    text.and_then(normalize_date)
}

fn parse_iso(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        // Keep the calendar date as written, not shifted to UTC
        return Some(dt.date_naive());
    }
    ISO_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

fn parse_iso_prefix(text: &str) -> Option<NaiveDate> {
    let prefix = text.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn parse_dotted(text: &str) -> Option<NaiveDate> {
    let caps = DOTTED_DATE.captures(text)?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_norwegian_text(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split_whitespace();
    let day_part = parts.next()?;
    let month_part = parts.next()?;
    let year_part = parts.next()?;

    let day: u32 = day_part.trim_end_matches('.').parse().ok()?;
    let month = month_number(month_part)?;
    let year: i32 = year_part.trim_end_matches([',', '.']).parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Month number for a Norwegian month name, case-insensitive.
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.trim_end_matches(['.', ',']).to_lowercase();
    NORWEGIAN_MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u32 + 1)
}

/// Render a date the way the municipal site prints it: `13. november 2025`.
pub fn long_form(date: NaiveDate) -> String {
    let month = NORWEGIAN_MONTHS[date.month0() as usize];
    format!("{}. {} {}", date.day(), month, date.year())
}
