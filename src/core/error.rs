//! Typed error handling for the GrubDash API
//!
//! Every request-level failure is an [`ApiError`]. Validation checks and
//! handlers return it through [`ApiResult`], and axum turns it into an HTTP
//! response through the [`IntoResponse`] implementation below.
//!
//! # Error Categories
//!
//! - [`ApiError::InvalidRequest`]: payload or state violation (400)
//! - [`ApiError::NotFound`]: unknown identifier or path (404)
//! - [`ApiError::Internal`]: store failure, never caused by the client (500)
//! - [`ConfigError`]: startup-time configuration and seed loading failures
//!
//! # Example
//!
//! ```rust,ignore
//! fn find(records: &Records<Dish>, id: &str) -> ApiResult<&Dish> {
//!     records
//!         .get(id)
//!         .ok_or_else(|| ApiError::not_found(format!("Dish does not exist: {id}.")))
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The request-level error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The client payload or the stored record's state rejects the request
    #[error("{message}")]
    InvalidRequest { message: String },

    /// The requested record or path does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Internal failure (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest { .. } => "INVALID_REQUEST",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref message) = self {
            tracing::error!(%message, "request failed with an internal error");
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid(format!("Invalid JSON: {}", err))
    }
}

/// A specialized Result type for request handling
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading configuration or seed data
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration or seed file could not be read
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid YAML for [`AppConfig`](crate::config::AppConfig)
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Seed file is not valid JSON for [`SeedData`](crate::storage::SeedData)
    #[error("Failed to parse seed data: {0}")]
    Seed(#[from] serde_json::Error),

    /// A value is well-formed but unusable
    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

// =============================================================================
// Tests
// =============================================================================
