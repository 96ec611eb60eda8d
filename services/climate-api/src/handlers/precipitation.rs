//! Trailing-year precipitation handler.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::Extension, response::Response};
use tracing::debug;

use climate_common::{trailing_year_start, ClimateError, ClimateResult};
use storage::ClimateStore;

use super::respond;
use crate::responses::{precipitation_by_date, NO_DATA};
use crate::state::AppState;

const ENDPOINT: &str = "precipitation";

/// GET /api/v1.0/precipitation - Precipitation by date for the last year of data
pub async fn precipitation_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    respond(&state, ENDPOINT, trailing_year_precipitation(&state.store)).await
}

async fn trailing_year_precipitation(
    store: &ClimateStore,
) -> ClimateResult<BTreeMap<String, Option<f64>>> {
    let latest = store
        .latest_date()
        .await?
        .ok_or_else(|| ClimateError::NoData(NO_DATA.to_string()))?;

    let since = trailing_year_start(latest);
    let rows = store.precipitation_since(since).await?;
    debug!(latest = %latest, since = %since, rows = rows.len(), "Trailing-year precipitation");

    Ok(precipitation_by_date(&rows))
}
