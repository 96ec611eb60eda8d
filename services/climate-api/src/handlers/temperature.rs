//! Temperature statistics handlers.
//!
//! Dates in the path are `MM-DD-YYYY`; dates in the response are
//! `YYYY-MM-DD`. A range whose start is after its end matches no rows and
//! returns null statistics rather than an error. A segment that does not
//! decode as UTF-8 is reported like any other malformed date.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Extension, Path},
    response::Response,
};
use chrono::NaiveDate;
use tracing::debug;

use climate_common::{format_iso_date, parse_url_date, ClimateError, ClimateResult};
use storage::ClimateStore;

use super::respond;
use crate::responses::{RangeStatsResponse, StartStatsResponse, INVALID_RANGE_DATES, INVALID_START_DATE};
use crate::state::AppState;

const START_ENDPOINT: &str = "start";
const RANGE_ENDPOINT: &str = "start_end";

/// GET /api/v1.0/:start - Min/avg/max temperature from `start` onward
pub async fn start_handler(
    Extension(state): Extension<Arc<AppState>>,
    start: Result<Path<String>, PathRejection>,
) -> Response {
    respond(&state, START_ENDPOINT, async {
        let Path(start) = start.map_err(|e| rejected_path(e, INVALID_START_DATE))?;
        stats_since(&state.store, &start).await
    })
    .await
}

/// GET /api/v1.0/:start/:end - Min/avg/max temperature over `start..=end`
pub async fn start_end_handler(
    Extension(state): Extension<Arc<AppState>>,
    range: Result<Path<(String, String)>, PathRejection>,
) -> Response {
    respond(&state, RANGE_ENDPOINT, async {
        let Path((start, end)) = range.map_err(|e| rejected_path(e, INVALID_RANGE_DATES))?;
        stats_between(&state.store, &start, &end).await
    })
    .await
}

async fn stats_since(store: &ClimateStore, start: &str) -> ClimateResult<StartStatsResponse> {
    let start = parse_path_date(start, INVALID_START_DATE)?;
    let stats = store.temperature_stats(start, None).await?;

    Ok(StartStatsResponse {
        start_date: format_iso_date(start),
        min_temperature: stats.min,
        max_temperature: stats.max,
        avg_temperature: stats.avg,
    })
}

async fn stats_between(
    store: &ClimateStore,
    start: &str,
    end: &str,
) -> ClimateResult<RangeStatsResponse> {
    let start = parse_path_date(start, INVALID_RANGE_DATES)?;
    let end = parse_path_date(end, INVALID_RANGE_DATES)?;
    let stats = store.temperature_stats(start, Some(end)).await?;

    Ok(RangeStatsResponse {
        start_date: format_iso_date(start),
        end_date: format_iso_date(end),
        min_temperature: stats.min,
        avg_temperature: stats.avg,
        max_temperature: stats.max,
    })
}

fn parse_path_date(raw: &str, message: &str) -> ClimateResult<NaiveDate> {
    parse_url_date(raw).map_err(|e| {
        debug!(input = raw, error = %e, "Rejected path date");
        ClimateError::InvalidDate(message.to_string())
    })
}

fn rejected_path(rejection: PathRejection, message: &str) -> ClimateError {
    debug!(error = %rejection, "Rejected path parameters");
    ClimateError::InvalidDate(message.to_string())
}
