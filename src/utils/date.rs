//! Date helpers: CLI parsing and the TEXT encoding used in the database.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a CLI date: `YYYY-MM-DD` (start of that local day) or
/// `YYYY-MM-DD HH:MM`.
pub fn parse_datetime_arg(s: &str) -> AppResult<DateTime<Local>> {
    let s = s.trim();

    let naive = if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        dt
    } else if let Some(d) = parse_date(s) {
        d.and_time(NaiveTime::MIN)
    } else {
        return Err(AppError::InvalidDate(s.to_string()));
    };

    naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Optional variant: `None` means "now".
pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<DateTime<Local>> {
    match input {
        Some(s) => parse_datetime_arg(s),
        None => Ok(Local::now()),
    }
}

/// Encode an instant for a TEXT column (RFC3339 with offset).
pub fn to_db_ts(dt: &DateTime<Local>) -> String {
    dt.to_rfc3339()
}

/// Decode a TEXT column written by [`to_db_ts`].
pub fn from_db_ts(s: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}
