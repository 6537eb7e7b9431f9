//! Request and response shapes for the gateway API.
//!
//! The gateway owns almost no data: these types cover the submit payload,
//! the uniform error envelope, and the optional structured error body a
//! failing backend may return.

use serde::{Deserialize, Serialize};

/// Model used when a submit request does not name one.
pub const DEFAULT_MODEL: &str = "llama3";

/// Fallback message when the backend reports no structured error.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Body of a `POST /submit` request, accepted as JSON or form-encoded.
///
/// `text` is forwarded as-is when present; the backend decides whether an
/// absent text is an error. `model` defaults to [`DEFAULT_MODEL`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// The only error shape ever returned to a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Structured error body a failing backend response may carry.
///
/// The `error` field is absent-safe: a missing or non-string field falls
/// back to [`UNKNOWN_ERROR`] at extraction time.
#[derive(Debug, Deserialize)]
pub struct BackendErrorBody {
    pub error: Option<String>,
}

/// Decode a submit body from either JSON or form encoding.
///
/// The original browser form posts `application/x-www-form-urlencoded`;
/// script clients post JSON. Anything else is treated as JSON.
pub fn parse_submit_body(content_type: Option<&str>, body: &[u8]) -> Result<SubmitRequest, String> {
    let is_form = content_type
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        serde_urlencoded::from_bytes(body).map_err(|e| format!("invalid form body: {e}"))
    } else {
        serde_json::from_slice(body).map_err(|e| format!("invalid JSON body: {e}"))
    }
}
