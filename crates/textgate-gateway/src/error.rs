//! Gateway error types and their HTTP mapping.
//!
//! Backend failures are normalized to status 500 with the uniform
//! `{"error": ...}` envelope, regardless of the status the backend actually
//! returned. Only malformed inbound bodies get a 400.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::models::{BackendErrorBody, ErrorEnvelope, UNKNOWN_ERROR};

/// Gateway-level error, one variant per failure class.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network-level failure reaching the backend. The caller sees the
    /// generic fallback message; the transport detail is only logged.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered with a non-success status. Carries the message
    /// extracted from its structured error body, if any.
    #[error("backend error: {0}")]
    Backend(String),

    /// The inbound request body could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::Unreachable(detail) => {
                error!("failed to reach backend: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, UNKNOWN_ERROR.to_string())
            }
            GatewayError::Backend(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            GatewayError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, axum::Json(ErrorEnvelope::new(message))).into_response()
    }
}

/// Extract the backend's error message from a failure response body.
///
/// Falls back to [`UNKNOWN_ERROR`] when the body is not JSON or carries no
/// `error` string, mirroring how a connection-level failure (which has no
/// body at all) is reported.
pub fn backend_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<BackendErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}
