//! Storage error types.

use std::path::PathBuf;

use climate_common::{ClimateError, DateParseError};
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Corrupt row: {0}")]
    InvalidDate(#[from] DateParseError),
}

impl From<StorageError> for ClimateError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DatasetNotFound(path) => {
                ClimateError::DatasetNotFound(path.display().to_string())
            }
            other => ClimateError::DatabaseError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dataset_maps_to_startup_error() {
        let err: ClimateError = StorageError::DatasetNotFound(PathBuf::from("Resources/hawaii.sqlite")).into();
        assert!(matches!(err, ClimateError::DatasetNotFound(ref p) if p.ends_with("hawaii.sqlite")));
    }

    #[test]
    fn test_query_failure_maps_to_database_error() {
        let err: ClimateError = StorageError::Query(sqlx::Error::RowNotFound).into();
        assert_eq!(err.http_status_code(), 500);
    }
}
