//! Station metadata and daily observation records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A weather-observation site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station code, e.g. `USC00519281`.
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in meters.
    pub elevation: f64,
}

/// Precipitation reported by one station for one day.
///
/// `prcp` is `None` when the station recorded no value; it is never
/// defaulted to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrecipitation {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

/// Temperature observed by one station for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: NaiveDate,
    pub tobs: f64,
}

/// A station together with the number of measurement rows it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}

/// Aggregate temperature over a set of measurement rows.
///
/// All fields are `None` when no rows matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// True when the aggregate saw no rows.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }

    /// Check `min <= avg <= max` (vacuously true when empty).
    pub fn is_ordered(&self) -> bool {
        match (self.min, self.avg, self.max) {
            (Some(min), Some(avg), Some(max)) => min <= avg && avg <= max,
            _ => true,
        }
    }
}
