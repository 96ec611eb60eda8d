//! Request metrics collection and Prometheus export.

use std::time::Duration;

use anyhow::{Context, Result};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder.
///
/// Must be called at most once per process.
pub fn install_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")
}

/// A handle backed by a recorder that is not installed globally.
///
/// Renders an empty exposition; used where several states coexist,
/// such as tests.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

/// Count a request to `endpoint`.
pub fn record_request(endpoint: &'static str) {
    counter!("climate_requests_total", "endpoint" => endpoint).increment(1);
}

/// Count a request to `endpoint` that was answered with an error body.
pub fn record_error(endpoint: &'static str, status: u16) {
    counter!(
        "climate_request_errors_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record time spent in dataset queries for one request.
pub fn record_query_duration(endpoint: &'static str, elapsed: Duration) {
    histogram!("climate_query_duration_ms", "endpoint" => endpoint)
        .record(elapsed.as_secs_f64() * 1000.0);
}
