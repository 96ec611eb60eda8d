//! Calendar tests for URL and storage date handling.

use chrono::{Duration, NaiveDate};
use climate_common::date::{format_iso_date, parse_iso_date, parse_url_date, trailing_year_start};

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_iso_round_trip_over_two_years() {
    let mut date = NaiveDate::from_ymd_opt(2015, 12, 25).unwrap();
    let end = NaiveDate::from_ymd_opt(2017, 12, 31).unwrap();

    while date <= end {
        let text = format_iso_date(date);
        assert_eq!(parse_iso_date(&text).unwrap(), date, "round trip failed for {}", text);
        date += Duration::days(1);
    }
}

#[test]
fn test_url_date_matches_iso_date() {
    let from_url = parse_url_date("08-23-2016").unwrap();
    let from_storage = parse_iso_date("2016-08-23").unwrap();
    assert_eq!(from_url, from_storage);
    assert_eq!(format_iso_date(from_url), "2016-08-23");
}

// ============================================================================
// Trailing-year window
// ============================================================================

#[test]
fn test_trailing_year_for_dataset_end() {
    let latest = parse_iso_date("2017-08-23").unwrap();
    assert_eq!(format_iso_date(trailing_year_start(latest)), "2016-08-23");
}

#[test]
fn test_trailing_year_is_365_days() {
    let latest = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
    let start = trailing_year_start(latest);
    assert_eq!((latest - start).num_days(), 365);
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_url_date_rejects_day_zero() {
    assert!(parse_url_date("01-00-2017").is_err());
}

#[test]
fn test_url_date_rejects_april_31() {
    assert!(parse_url_date("04-31-2017").is_err());
}
