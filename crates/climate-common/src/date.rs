//! Calendar date handling for observation queries.
//!
//! Dates are stored in the dataset as `YYYY-MM-DD` text and are accepted
//! from URLs as hyphen-separated `MM-DD-YYYY`.

use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Storage and response format for calendar days.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the "last year" window, anchored at the newest date in the dataset.
pub const TRAILING_YEAR_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("Expected MM-DD-YYYY, got '{0}'")]
    InvalidFormat(String),

    #[error("Not a calendar date: '{0}'")]
    OutOfRange(String),

    #[error("Expected YYYY-MM-DD, got '{0}'")]
    InvalidStoredDate(String),
}

/// Parse a `MM-DD-YYYY` path segment.
///
/// Month and day may be one or two digits; the year must be four digits.
/// Any other separator, extra component or trailing text is rejected.
pub fn parse_url_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let parts: Vec<&str> = s.split('-').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(DateParseError::InvalidFormat(s.to_string()));
    };

    let well_formed = is_digits(month, 1, 2) && is_digits(day, 1, 2) && is_digits(year, 4, 4);
    if !well_formed {
        return Err(DateParseError::InvalidFormat(s.to_string()));
    }

    // Digit-only and bounded in length, so these parses cannot fail.
    let month: u32 = month.parse().map_err(|_| DateParseError::InvalidFormat(s.to_string()))?;
    let day: u32 = day.parse().map_err(|_| DateParseError::InvalidFormat(s.to_string()))?;
    let year: i32 = year.parse().map_err(|_| DateParseError::InvalidFormat(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateParseError::OutOfRange(s.to_string()))
}

/// Parse a `YYYY-MM-DD` value as stored in the `measurement.date` column.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
        .map_err(|_| DateParseError::InvalidStoredDate(s.to_string()))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// First day of the trailing-year window ending at `latest`.
pub fn trailing_year_start(latest: NaiveDate) -> NaiveDate {
    latest - Duration::days(TRAILING_YEAR_DAYS)
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
