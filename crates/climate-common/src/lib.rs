//! Common types and utilities shared across the climate services.

pub mod date;
pub mod error;
pub mod observation;

pub use date::{format_iso_date, parse_iso_date, parse_url_date, trailing_year_start, DateParseError};
pub use error::{ClimateError, ClimateResult};
pub use observation::{
    DailyPrecipitation, Station, StationActivity, TemperatureObservation, TemperatureStats,
};
