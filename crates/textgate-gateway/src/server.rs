//! Axum HTTP server for the gateway.
//!
//! Routes map one-to-one onto backend calls; handlers hold no state beyond
//! the shared HTTP client and the backend base address.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use bytes::Bytes;
use reqwest::Client;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::forward::{relay_event_stream, relay_json};
use crate::models::parse_submit_body;

/// The page served at `/`.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared application state, cloned per request. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pooled HTTP client for backend calls.
    client: Client,
    /// Backend base URL with any trailing slash removed.
    backend_base: String,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let client = Client::builder().pool_max_idle_per_host(10).build()?;
        Ok(Self {
            client,
            backend_base: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full backend URL for an API path.
    fn backend_url(&self, path: &str) -> String {
        format!("{}{path}", self.backend_base)
    }
}

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/submit", post(submit))
        .route("/api/texts", get(list_texts).delete(delete_all_texts))
        .route("/api/texts/{id}", delete(delete_text))
        .route("/api/stream_gpt", post(stream_gpt))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the gateway on a pre-bound listener until the process is terminated.
pub async fn serve(listener: TcpListener, config: GatewayConfig) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let state = AppState::new(&config)?;

    info!("gateway listening on {addr}, forwarding to {}", state.backend_base);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Serve the embedded form page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Local health check; does not touch the backend.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Forward a text submission, defaulting the model when absent.
async fn submit(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let request = match parse_submit_body(content_type, &body) {
        Ok(request) => request,
        Err(message) => return GatewayError::BadRequest(message).into_response(),
    };

    debug!(model = %request.model, "forwarding text submission");

    relay_json(
        state
            .client
            .post(state.backend_url("/api/submit"))
            .json(&request),
        false,
    )
    .await
}

/// Relay the stored texts list.
async fn list_texts(State(state): State<AppState>) -> Response {
    relay_json(state.client.get(state.backend_url("/api/texts")), false).await
}

/// Relay a delete-all, passing the backend's status through.
async fn delete_all_texts(State(state): State<AppState>) -> Response {
    relay_json(state.client.delete(state.backend_url("/api/texts")), true).await
}

/// Relay a single-text delete. The id is forwarded literally.
async fn delete_text(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    relay_json(
        state
            .client
            .delete(state.backend_url(&format!("/api/texts/{id}"))),
        true,
    )
    .await
}

/// Relay a generation request as a live event-stream.
///
/// The inbound body is forwarded verbatim as JSON; the backend validates it.
async fn stream_gpt(State(state): State<AppState>, body: Bytes) -> Response {
    relay_event_stream(
        state
            .client
            .post(state.backend_url("/api/stream_gpt"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body),
    )
    .await
}
