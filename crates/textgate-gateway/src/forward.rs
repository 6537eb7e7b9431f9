//! Request forwarding to the backend with proper streaming support.
//!
//! Two relay shapes cover every proxied route: a buffered JSON relay and an
//! incremental SSE relay. Both convert backend failures into the uniform
//! error envelope; neither retries.

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;
use tracing::debug;

use crate::error::{backend_error_message, GatewayError};

/// Forward a request and relay the backend's JSON response.
///
/// When `relay_status` is set the backend's success status code is passed
/// through to the caller (delete routes); otherwise the caller always gets
/// 200. Any backend failure, connection-level or non-2xx, becomes a 500
/// envelope.
pub async fn relay_json(request: reqwest::RequestBuilder, relay_status: bool) -> Response {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => return GatewayError::Unreachable(e.to_string()).into_response(),
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        return GatewayError::Backend(backend_error_message(&body)).into_response();
    }

    let relayed_status = if relay_status {
        StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::OK)
    } else {
        StatusCode::OK
    };

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    match response.bytes().await {
        Ok(body) => Response::builder()
            .status(relayed_status)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => GatewayError::Unreachable(e.to_string()).into_response(),
    }
}

/// Forward a request and relay the backend's response as an event-stream.
///
/// The caller's headers are written as soon as the backend responds; each
/// backend chunk is relayed as an opaque byte sequence without buffering or
/// reframing. If the backend stream errors mid-flight the caller's
/// connection terminates; headers are already out, so no envelope is
/// possible at that point.
pub async fn relay_event_stream(request: reqwest::RequestBuilder) -> Response {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => return GatewayError::Unreachable(e.to_string()).into_response(),
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        return GatewayError::Backend(backend_error_message(&body)).into_response();
    }

    debug!("relaying backend event-stream");

    let stream = response.bytes_stream().map_err(std::io::Error::other);

    Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "text/event-stream")
        .header("cache-control", "no-cache")
        .header("x-accel-buffering", "no") // disable nginx buffering
        .body(Body::from_stream(stream))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
