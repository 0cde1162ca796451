//! Error types for workwise-web
//!
//! Handlers return [`ApiResult`]. Every error renders as
//! `{"error": {"code": ..., "message": ...}}` except validation failures,
//! which render the per-field map the registration page displays.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Field name -> first failing rule's message
pub type FieldErrors = BTreeMap<String, String>;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed or revoked bearer token (401)
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Requester does not own the resource (403)
    #[error("{0}")]
    Unauthorized(String),

    /// Requester's role cannot use this endpoint (403)
    #[error("{0}")]
    ForbiddenRole(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// One or more fields failed validation (422)
    #[error("The given data was invalid")]
    Validation(FieldErrors),

    /// Conflict (409), e.g. email already registered
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// workwise-common error
    #[error("Common error: {0}")]
    Common(workwise_common::Error),
}

impl From<workwise_common::Error> for ApiError {
    fn from(err: workwise_common::Error) -> Self {
        use workwise_common::Error as E;
        match err {
            E::NotFound(what) => ApiError::NotFound(what),
            E::InvalidInput(msg) => ApiError::BadRequest(msg),
            E::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Common(other),
        }
    }
}

impl ApiError {
    /// Single-field validation failure
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), message.into());
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Validation(errors) = self {
            let body = Json(json!({
                "message": "The given data was invalid.",
                "errors": errors,
            }));
            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }

        let (status, error_code, message) = match self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required".to_string(),
            ),
            ApiError::Unauthorized(msg) => (StatusCode::FORBIDDEN, "UNAUTHORIZED", msg),
            ApiError::ForbiddenRole(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN_ROLE", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            // Details go to the log only
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::Common(ref err) => {
                tracing::error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::Validation(_) => unreachable!("handled above"),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
