//! Human-readable date and relative-time formatting.

use chrono::{DateTime, NaiveDate, Utc};

use crate::progress::midnight_utc;

/// Descending unit table for relative-time phrasing.
const INTERVALS: &[(&str, i64)] = &[
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

/// Output style for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// "Jan 15, 2024"
    Short,
    /// "January 15, 2024"
    Medium,
    /// "Monday, January 15, 2024"
    Long,
}

/// Format a calendar date in US English.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Short => "%b %-d, %Y",
        DateFormat::Medium => "%B %-d, %Y",
        DateFormat::Long => "%A, %B %-d, %Y",
    };
    date.format(pattern).to_string()
}

/// Phrase the distance between a date and `now` in the largest whole
/// unit: "3 weeks ago", "in 2 days", or "just now" below one minute.
///
/// The date is taken at its UTC midnight, so sub-day units appear only
/// for dates near `now`.
pub fn relative_time(date: NaiveDate, now: DateTime<Utc>) -> String {
    let seconds = (now - midnight_utc(date)).num_seconds();
    let is_past = seconds > 0;
    let abs = seconds.abs();

    for (label, unit_seconds) in INTERVALS {
        let count = abs / unit_seconds;
        if count >= 1 {
            let plural = if count > 1 { "s" } else { "" };
            return if is_past {
                format!("{count} {label}{plural} ago")
            } else {
                format!("in {count} {label}{plural}")
            };
        }
    }

    "just now".to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
