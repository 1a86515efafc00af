//! Date utilities
//!
//! All calendar math is on `chrono::NaiveDate`; the system clock is read
//! only in the thin `today`/`tomorrow` helpers so everything else can be
//! tested against a fixed date.

use chrono::{Days, Local, NaiveDate};

/// "YYYY-MM-DD"
pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn tomorrow() -> NaiveDate {
    next_day(today())
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date + Days::new(1)
}

/// Short label for navigation: "Today", "Tomorrow" or "Wed, Jan 1".
/// An unparseable date is shown as-is.
pub fn display_label(date: &str, today: NaiveDate) -> String {
    match parse_date(date) {
        Some(d) if d == today => "Today".to_string(),
        Some(d) if d == next_day(today) => "Tomorrow".to_string(),
        Some(d) => d.format("%a, %b %-d").to_string(),
        None => date.to_string(),
    }
}
