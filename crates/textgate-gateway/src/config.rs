//! Gateway configuration.
//!
//! The gateway has exactly two knobs: the port it listens on and the base
//! address of the backend it forwards to. Defaults match the compose setup
//! (`backend` resolves on the container network).

/// Default listen port for the gateway.
pub const DEFAULT_PORT: u16 = 3000;

/// Default backend base address.
pub const DEFAULT_BACKEND_URL: &str = "http://backend:5000";

/// Runtime configuration for the gateway server.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port to listen on.
    pub port: u16,
    /// Base URL of the backend service (scheme + host + port, no path).
    pub backend_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
