//! Error types for the climate services.

use thiserror::Error;

/// Result type alias using ClimateError.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Primary error type for climate API operations.
#[derive(Debug, Error)]
pub enum ClimateError {
    // === Startup Errors ===
    #[error("Dataset file not found: {0}")]
    DatasetNotFound(String),

    // === Request Errors ===
    /// Carries the message shown to the client verbatim.
    #[error("{0}")]
    InvalidDate(String),

    #[error("{0}")]
    NoData(String),

    // === Storage Errors ===
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ClimateError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ClimateError::InvalidDate(_) => 400,
            ClimateError::NoData(_) => 404,
            ClimateError::DatasetNotFound(_) | ClimateError::DatabaseError(_) => 500,
        }
    }

    /// Whether this error is caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status_code())
    }

    /// Message placed in the `error` field of a JSON response body.
    ///
    /// Server-side failures are not echoed back to clients.
    pub fn public_message(&self) -> String {
        match self {
            ClimateError::InvalidDate(msg) | ClimateError::NoData(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}
