//! Response bodies and JSON helpers.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use climate_common::{format_iso_date, ClimateError, DailyPrecipitation, TemperatureObservation};

use crate::config::ErrorMode;
use crate::metrics;

pub const INVALID_START_DATE: &str = "Invalid date format. Use MM-DD-YYYY.";
pub const INVALID_RANGE_DATES: &str = "Invalid date format. Use MM-DD-YYYY for start and end dates.";
pub const NO_DATA: &str = "No data available";

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /api/v1.0/tobs`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TobsResponse {
    pub most_active_station: String,
    /// Temperature keyed by `YYYY-MM-DD`.
    pub tobs_data: BTreeMap<String, f64>,
}

/// `GET /api/v1.0/<start>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartStatsResponse {
    pub start_date: String,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
}

/// `GET /api/v1.0/<start>/<end>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeStatsResponse {
    pub start_date: String,
    pub end_date: String,
    pub min_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
}

/// Key precipitation by date.
///
/// Several stations report the same day; the row that comes last in
/// storage order wins, and a missing reading stays `null`.
pub fn precipitation_by_date(rows: &[DailyPrecipitation]) -> BTreeMap<String, Option<f64>> {
    rows.iter()
        .map(|r| (format_iso_date(r.date), r.prcp))
        .collect()
}

/// Key temperature observations by date.
pub fn tobs_by_date(rows: &[TemperatureObservation]) -> BTreeMap<String, f64> {
    rows.iter()
        .map(|r| (format_iso_date(r.date), r.tobs))
        .collect()
}

/// Serialize `body` as JSON with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, Json(body)).into_response()
}

/// Report `err` as `{"error": ...}` with a status chosen by `mode`.
pub fn error_response(mode: ErrorMode, endpoint: &'static str, err: ClimateError) -> Response {
    let status = mode.status_for(&err);

    if err.is_client_error() {
        warn!(endpoint, status = status.as_u16(), error = %err, "Request rejected");
    } else {
        error!(endpoint, status = status.as_u16(), error = %err, "Request failed");
    }
    metrics::record_error(endpoint, status.as_u16());

    json_response(
        status,
        &ErrorBody {
            error: err.public_message(),
        },
    )
}
