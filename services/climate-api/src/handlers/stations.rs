//! Station listing handler.

use std::sync::Arc;

use axum::{extract::Extension, response::Response};

use climate_common::ClimateError;

use super::respond;
use crate::state::AppState;

const ENDPOINT: &str = "stations";

/// GET /api/v1.0/stations - Every station, unfiltered
pub async fn stations_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    respond(&state, ENDPOINT, async {
        state.store.all_stations().await.map_err(ClimateError::from)
    })
    .await
}
