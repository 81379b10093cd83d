//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::{ParseRegionError, ParseSchoolYearError};
use crate::source::SourceError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// The holiday source failed while fetching data for display
    Upstream(SourceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Upstream(e) => {
                let error = ApiError::new("UPSTREAM_ERROR", e.to_string());
                let error = match e.status() {
                    Some(status) => error.with_details(format!("source responded with status {}", status)),
                    None => error,
                };
                (StatusCode::BAD_GATEWAY, error)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        AppError::Upstream(err)
    }
}

impl From<ParseSchoolYearError> for AppError {
    fn from(err: ParseSchoolYearError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ParseRegionError> for AppError {
    fn from(err: ParseRegionError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
