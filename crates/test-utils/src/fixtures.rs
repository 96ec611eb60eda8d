//! Common test fixtures for climate dataset tests.
//!
//! A small slice shaped like the Hawaii dataset: four stations, one of
//! which never reports, and thirteen measurements ending on 2017-08-23.
//! Rows are grouped by station, in the order the real file stores them.

/// A row of the `station` table.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl StationRow {
    pub fn new(station: &str, name: &str, latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            station: station.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
            elevation,
        }
    }
}

/// A row of the `measurement` table.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    pub station: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

impl MeasurementRow {
    pub fn new(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Self {
        Self {
            station: station.to_string(),
            date: date.to_string(),
            prcp,
            tobs,
        }
    }
}

/// Station codes used by the fixture.
pub mod station_ids {
    pub const WAIKIKI: &str = "USC00519397";
    pub const KANEOHE: &str = "USC00513117";
    pub const WAIHEE: &str = "USC00519281";
    pub const MANOA: &str = "USC00516128";
}

/// Known answers for queries against [`hawaii_measurements`].
pub mod expected {
    /// Newest date in the fixture.
    pub const LATEST_DATE: &str = "2017-08-23";
    /// Start of the trailing year for [`LATEST_DATE`].
    pub const TRAILING_YEAR_START: &str = "2016-08-23";
    /// Station with the most measurement rows.
    pub const MOST_ACTIVE_STATION: &str = super::station_ids::WAIHEE;
    pub const MOST_ACTIVE_COUNT: i64 = 6;

    pub const STATION_COUNT: i64 = 4;
    pub const MEASUREMENT_COUNT: i64 = 13;

    /// Measurement rows with date >= [`TRAILING_YEAR_START`].
    pub const TRAILING_YEAR_ROWS: usize = 10;
    /// Distinct dates among those rows.
    pub const TRAILING_YEAR_DATES: usize = 7;

    /// Stats for date >= 2017-01-01.
    pub const SINCE_2017_MIN: f64 = 62.0;
    pub const SINCE_2017_MAX: f64 = 81.0;
    pub const SINCE_2017_AVG: f64 = 516.0 / 7.0;

    /// Stats for 2016-08-23 <= date <= 2016-12-31.
    pub const LATE_2016_MIN: f64 = 66.0;
    pub const LATE_2016_MAX: f64 = 81.0;
    pub const LATE_2016_AVG: f64 = 224.0 / 3.0;
}

/// All fixture stations.
pub fn hawaii_stations() -> Vec<StationRow> {
    vec![
        StationRow::new(station_ids::WAIKIKI, "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
        StationRow::new(station_ids::KANEOHE, "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
        StationRow::new(station_ids::WAIHEE, "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
        StationRow::new(station_ids::MANOA, "MANOA LYON ARBO 785.2, HI US", 21.3331, -157.8025, 152.4),
    ]
}

/// All fixture measurements, grouped by station.
pub fn hawaii_measurements() -> Vec<MeasurementRow> {
    use station_ids::*;

    vec![
        MeasurementRow::new(WAIKIKI, "2016-08-23", Some(0.08), 81.0),
        MeasurementRow::new(WAIKIKI, "2016-12-31", Some(0.01), 66.0),
        MeasurementRow::new(WAIKIKI, "2017-01-01", None, 65.0),
        MeasurementRow::new(WAIKIKI, "2017-08-23", Some(0.0), 81.0),
        MeasurementRow::new(KANEOHE, "2010-01-01", Some(0.08), 65.0),
        MeasurementRow::new(KANEOHE, "2015-06-01", Some(0.0), 70.0),
        MeasurementRow::new(KANEOHE, "2017-07-04", Some(0.02), 78.0),
        MeasurementRow::new(WAIHEE, "2016-08-22", Some(0.10), 77.0),
        MeasurementRow::new(WAIHEE, "2016-08-23", Some(1.79), 77.0),
        MeasurementRow::new(WAIHEE, "2017-01-01", Some(0.0), 62.0),
        MeasurementRow::new(WAIHEE, "2017-06-15", None, 75.0),
        MeasurementRow::new(WAIHEE, "2017-08-18", Some(0.06), 79.0),
        MeasurementRow::new(WAIHEE, "2017-08-23", Some(0.45), 76.0),
    ]
}
