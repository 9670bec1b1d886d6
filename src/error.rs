//! Portal Backstage error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Portal Backstage error type
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup of an artifact id that was never stored
    #[error("Artifact not found")]
    ArtifactNotFound(String),

    /// Request input failed validation or type coercion
    #[error("{0}")]
    InvalidInput(String),

    /// Buffered request text exceeded its size cap
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Portal Backstage operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ArtifactNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArtifactNotFound(_) => "NOT_FOUND",
            Self::InvalidInput(_) => "VALIDATION_ERROR",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            _ => "INTERNAL",
        }
    }
}

/// API error response
///
/// `detail` repeats the message at the top level for clients that read a
/// `{"detail": ...}` body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: String,
    pub error: ApiErrorDetail,
}

/// API error detail
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl From<&Error> for ApiError {
    fn from(err: &Error) -> Self {
        let message = err.to_string();
        Self {
            detail: message.clone(),
            error: ApiErrorDetail {
                code: err.code().to_string(),
                message,
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(ApiError::from(&self))).into_response()
    }
}
