//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::domain::DocumentId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "validation failed",
///     "details": { "quantity": [{ "code": "range", "params": { "max": 12.0, "min": 1.0, "value": 13 } }] }
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Field-level validation details, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                        |
/// |-----------|-----------------|------------------------------------|
/// | 1000–1999 | Validation      | 422 Unprocessable / 400 Bad Request |
/// | 2000–2999 | Not Found       | 404 Not Found                      |
/// | 3000–3999 | Server          | 500 Internal Server Error          |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Payload parsed but failed schema rules (range, email, ...).
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Payload could not be parsed into the expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The referenced event id is not a valid document identifier.
    #[error("invalid event id: {0}")]
    InvalidEventId(String),

    /// No event exists with the given id.
    #[error("event not found: {0}")]
    EventNotFound(DocumentId),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// The document store was never connected.
    #[error("database not configured")]
    NotConfigured,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::MalformedPayload(_) => 1002,
            Self::InvalidEventId(_) => 1003,
            Self::EventNotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::PersistenceError(_) => 3001,
            Self::NotConfigured => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidEventId(_) => StatusCode::BAD_REQUEST,
            Self::EventNotFound(_) => StatusCode::NOT_FOUND,
            Self::PersistenceError(_) | Self::NotConfigured | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
