//! Most-active-station temperature handler.

use std::sync::Arc;

use axum::{extract::Extension, response::Response};
use tracing::debug;

use climate_common::{trailing_year_start, ClimateError, ClimateResult};
use storage::ClimateStore;

use super::respond;
use crate::responses::{tobs_by_date, TobsResponse, NO_DATA};
use crate::state::AppState;

const ENDPOINT: &str = "tobs";

/// GET /api/v1.0/tobs - Last year of temperatures at the busiest station
pub async fn tobs_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    respond(&state, ENDPOINT, most_active_tobs(&state.store)).await
}

async fn most_active_tobs(store: &ClimateStore) -> ClimateResult<TobsResponse> {
    let no_data = || ClimateError::NoData(NO_DATA.to_string());

    let active = store.most_active_station().await?.ok_or_else(no_data)?;
    let latest = store.latest_date().await?.ok_or_else(no_data)?;

    let since = trailing_year_start(latest);
    let observations = store.temperature_observations(&active.station, since).await?;
    debug!(
        station = %active.station,
        observations = active.observations,
        returned = observations.len(),
        "Most active station temperatures"
    );

    Ok(TobsResponse {
        most_active_station: active.station,
        tobs_data: tobs_by_date(&observations),
    })
}
