//! Project progress derivation and day-difference helpers.
//!
//! Progress is a pure, time-dependent function over a project's lifecycle
//! dates. It is never cached (a cached value would go stale); callers
//! re-evaluate per request. Every function takes `now` explicitly so
//! tests can pin the clock; [`project_progress`] is the wall-clock
//! convenience wrapper.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::devlog::DevlogProject;

/// Convert a calendar date to its UTC midnight instant.
pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Compute the progress percentage for a project's lifecycle dates at a
/// given instant.
///
/// - A set `completion_date` means done: 100, regardless of `now`.
/// - Without an `expected_end_date` progress cannot be estimated: 0.
/// - At or past the expected end: 100.
/// - Otherwise the elapsed share of the start-to-end window, rounded,
///   clamped to [0, 100].
pub fn progress_at(
    start_date: NaiveDate,
    expected_end_date: Option<NaiveDate>,
    completion_date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> u8 {
    if completion_date.is_some() {
        return 100;
    }

    let Some(expected_end) = expected_end_date else {
        return 0;
    };

    let start = midnight_utc(start_date);
    let end = midnight_utc(expected_end);

    if now >= end {
        return 100;
    }

    let total = (end - start).num_seconds() as f64;
    let elapsed = (now - start).num_seconds() as f64;

    let pct = (elapsed / total * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// [`progress_at`] evaluated at the current wall-clock time.
pub fn project_progress(project: &DevlogProject) -> u8 {
    progress_at(
        project.start_date,
        project.expected_end_date,
        project.completion_date,
        Utc::now(),
    )
}

/// Whole days elapsed since a date (floor; negative when the date is in
/// the future).
pub fn days_since(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now - midnight_utc(date)).num_seconds().div_euclid(86_400)
}

/// Whole days remaining until a date (floor; negative when the date is
/// in the past).
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (midnight_utc(date) - now).num_seconds().div_euclid(86_400)
}

/// Whether a date's midnight instant lies before `now`.
pub fn is_past(date: NaiveDate, now: DateTime<Utc>) -> bool {
    midnight_utc(date) < now
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
