//! Service configuration.

use std::path::PathBuf;

use axum::http::StatusCode;
use climate_common::ClimateError;

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "Resources/hawaii.sqlite";

/// Default pool size for the read-only dataset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How request errors are reported to clients.
///
/// Both modes return a JSON body of the form `{"error": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Client errors get 4xx statuses, server errors 5xx.
    #[default]
    Strict,
    /// Client errors are reported with 200 for v1.0 clients that only
    /// inspect the body. Server errors still get 5xx.
    Legacy,
}

impl ErrorMode {
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            ErrorMode::Legacy
        } else {
            ErrorMode::Strict
        }
    }

    /// HTTP status used to report `err` in this mode.
    pub fn status_for(&self, err: &ClimateError) -> StatusCode {
        let code = match self {
            ErrorMode::Legacy if err.is_client_error() => 200,
            _ => err.http_status_code(),
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Resolved settings for the API service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// SQLite dataset file.
    pub database_path: PathBuf,

    /// Maximum pooled connections to the dataset.
    pub max_connections: u32,

    /// Error status reporting mode.
    pub error_mode: ErrorMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            error_mode: ErrorMode::default(),
        }
    }
}

impl ApiConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Self::default()
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.database_path, PathBuf::from("Resources/hawaii.sqlite"));
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.error_mode, ErrorMode::Strict);
    }

    #[test]
    fn test_builder() {
        let config = ApiConfig::new("/data/hawaii.sqlite")
            .with_max_connections(2)
            .with_error_mode(ErrorMode::Legacy);
        assert_eq!(config.database_path, PathBuf::from("/data/hawaii.sqlite"));
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.error_mode, ErrorMode::Legacy);
    }

    #[test]
    fn test_strict_statuses() {
        let mode = ErrorMode::Strict;
        assert_eq!(
            mode.status_for(&ClimateError::InvalidDate("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            mode.status_for(&ClimateError::NoData("none".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_legacy_statuses() {
        let mode = ErrorMode::from_legacy_flag(true);
        assert_eq!(mode.status_for(&ClimateError::InvalidDate("bad".into())), StatusCode::OK);
        assert_eq!(mode.status_for(&ClimateError::NoData("none".into())), StatusCode::OK);
        assert_eq!(
            mode.status_for(&ClimateError::DatabaseError("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
