//! Shared test helpers: mock backend servers and gateway construction.

#![allow(dead_code)]

use axum::Router;

use textgate_gateway::{AppState, GatewayConfig};

/// Serve a mock backend on an ephemeral localhost port, returning its base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on (bound then released).
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Build a gateway router forwarding to the given backend.
pub fn gateway_for(backend_url: &str) -> Router {
    let config = GatewayConfig {
        port: 0,
        backend_url: backend_url.to_string(),
    };
    textgate_gateway::router(AppState::new(&config).unwrap())
}
