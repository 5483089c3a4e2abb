//! API error handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use core_kernel::PortError;
use domain_claims::{ClaimError, FieldViolation};

/// Message returned for every missing claim
pub const CLAIM_NOT_FOUND: &str = "Claim not found";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Unprocessable request: {0}")]
    Unprocessable(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Payload of the `detail` key
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Violations(Vec<FieldViolation>),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match self {
            ApiError::Validation(violations) => ErrorDetail::Violations(violations),
            ApiError::NotFound(msg) | ApiError::Unprocessable(msg) | ApiError::Conflict(msg) => {
                ErrorDetail::Message(msg)
            }
            ApiError::ServiceUnavailable(msg) => {
                warn!(reason = %msg, "Storage unavailable");
                ErrorDetail::Message("Service unavailable".to_string())
            }
            ApiError::Internal(msg) => {
                error!(reason = %msg, "Internal error");
                ErrorDetail::Message("Internal server error".to_string())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(CLAIM_NOT_FOUND.to_string()),
            PortError::Validation { message, field } => ApiError::Validation(vec![FieldViolation::new(
                field.unwrap_or_else(|| "body".to_string()),
                "invalid",
                message,
            )]),
            PortError::Conflict { message } => ApiError::Conflict(message),
            err @ PortError::Connection { .. } => ApiError::ServiceUnavailable(err.to_string()),
            err @ (PortError::Transformation { .. } | PortError::Internal { .. }) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        ApiError::Validation(err.violations())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}
