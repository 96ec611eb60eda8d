//! Generators for larger synthetic datasets.
//!
//! Values follow simple patterns so tests can recompute expected
//! aggregates without hard-coding them.

use chrono::{Duration, NaiveDate};

use crate::fixtures::{MeasurementRow, StationRow};

/// Creates `count` stations with codes `TEST0000`, `TEST0001`, ...
pub fn generate_stations(count: usize) -> Vec<StationRow> {
    (0..count)
        .map(|i| StationRow {
            station: format!("TEST{:04}", i),
            name: format!("SYNTHETIC STATION {}", i),
            latitude: 21.0 + i as f64 * 0.01,
            longitude: -157.0 - i as f64 * 0.01,
            elevation: i as f64 * 10.0,
        })
        .collect()
}

/// Creates one measurement per day for `days` days starting at `start`.
///
/// Temperature cycles through `base_tobs..base_tobs + 10` by day index.
/// Every seventh day has no precipitation value; the rest report
/// `day_index / 100` inches.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use test_utils::generate_daily_series;
///
/// let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
/// let rows = generate_daily_series("TEST0000", start, 14, 60.0);
/// assert_eq!(rows.len(), 14);
/// assert_eq!(rows[0].date, "2017-01-01");
/// assert_eq!(rows[3].tobs, 63.0);
/// assert!(rows[7].prcp.is_none());
/// ```
pub fn generate_daily_series(
    station: &str,
    start: NaiveDate,
    days: i64,
    base_tobs: f64,
) -> Vec<MeasurementRow> {
    (0..days)
        .map(|i| {
            let date = start + Duration::days(i);
            MeasurementRow {
                station: station.to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                prcp: if i % 7 == 0 && i > 0 {
                    None
                } else {
                    Some(i as f64 / 100.0)
                },
                tobs: base_tobs + (i % 10) as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_stations_unique_codes() {
        let stations = generate_stations(25);
        let mut codes: Vec<_> = stations.iter().map(|s| s.station.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 25);
        assert_eq!(stations[7].station, "TEST0007");
    }

    #[test]
    fn test_daily_series_crosses_year_end() {
        let start = NaiveDate::from_ymd_opt(2016, 12, 30).unwrap();
        let rows = generate_daily_series("TEST0000", start, 4, 70.0);
        let dates: Vec<_> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2016-12-30", "2016-12-31", "2017-01-01", "2017-01-02"]);
    }

    #[test]
    fn test_daily_series_temperature_cycle() {
        let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        let rows = generate_daily_series("TEST0000", start, 20, 60.0);
        assert_eq!(rows[9].tobs, 69.0);
        assert_eq!(rows[10].tobs, 60.0);
        assert!(rows[0].prcp.is_some());
        assert!(rows[14].prcp.is_none());
    }
}
