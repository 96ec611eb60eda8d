//! Application state for the climate API.

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusHandle;
use storage::ClimateStore;

use crate::config::{ApiConfig, ErrorMode};

/// Shared application state.
pub struct AppState {
    /// Read-only dataset access.
    pub store: ClimateStore,

    /// Resolved service configuration.
    pub config: ApiConfig,

    /// Renders the Prometheus exposition for `/metrics`.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Open the configured dataset and build the state.
    ///
    /// Fails when the dataset file is missing or cannot be opened.
    pub async fn new(config: ApiConfig, metrics: PrometheusHandle) -> Result<Self> {
        let store = ClimateStore::open(&config.database_path, config.max_connections)
            .await
            .with_context(|| {
                format!(
                    "Failed to open climate dataset {}",
                    config.database_path.display()
                )
            })?;

        Ok(Self::from_store(store, config, metrics))
    }

    /// Build state around an already opened store.
    pub fn from_store(store: ClimateStore, config: ApiConfig, metrics: PrometheusHandle) -> Self {
        Self {
            store,
            config,
            metrics,
        }
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.config.error_mode
    }
}
