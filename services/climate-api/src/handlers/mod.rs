//! HTTP request handlers for the climate API.

pub mod health;
pub mod landing;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

use std::future::Future;
use std::time::Instant;

use axum::{http::StatusCode, response::Response};
use serde::Serialize;

use climate_common::ClimateResult;

use crate::metrics;
use crate::responses::{error_response, json_response};
use crate::state::AppState;

/// Run one request's queries and turn the outcome into a JSON response.
///
/// Counts the request, times the work and reports failures according to
/// the configured error mode.
pub(crate) async fn respond<T, F>(state: &AppState, endpoint: &'static str, work: F) -> Response
where
    T: Serialize,
    F: Future<Output = ClimateResult<T>>,
{
    metrics::record_request(endpoint);

    let started = Instant::now();
    let result = work.await;
    metrics::record_query_duration(endpoint, started.elapsed());

    match result {
        Ok(body) => json_response(StatusCode::OK, &body),
        Err(e) => error_response(state.error_mode(), endpoint, e),
    }
}
