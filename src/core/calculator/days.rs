//! Calendar-day arithmetic shared by every "days since" figure.

use chrono::{DateTime, Local};

/// Whole calendar days from `start` to `end` in the local calendar.
///
/// Both instants are truncated to local midnight before subtracting, so two
/// instants on the same day always yield 0 regardless of the hour. A `start`
/// after `end` yields a negative count.
pub fn days_between(start: DateTime<Local>, end: DateTime<Local>) -> i64 {
    (end.date_naive() - start.date_naive()).num_days()
}
