//! Health, readiness and metrics handlers.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::responses::json_response;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stations: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<i64>,
}

/// GET /health - Basic health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check (verifies the dataset can be queried)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let counts = async {
        let stations = state.store.station_count().await?;
        let measurements = state.store.measurement_count().await?;
        Ok::<_, storage::StorageError>((stations, measurements))
    }
    .await;

    let (status, response) = match counts {
        Ok((stations, measurements)) => (
            StatusCode::OK,
            ReadyResponse {
                ready: true,
                database: "ok".to_string(),
                stations: Some(stations),
                measurements: Some(measurements),
            },
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ReadyResponse {
                    ready: false,
                    database: format!("error: {}", e),
                    stations: None,
                    measurements: None,
                },
            )
        }
    };

    json_response(status, &response)
}

/// GET /metrics - Prometheus metrics
pub async fn metrics_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
        .into_response()
}
