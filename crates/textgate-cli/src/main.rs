//! CLI entry point - the composition root.
//!
//! Parses configuration, binds the listener, and hands off to the gateway
//! serve loop. The process runs until externally terminated; a failed bind
//! (port already taken) is a fatal startup error.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use textgate_gateway::GatewayConfig;

#[derive(Debug, Parser)]
#[command(name = "textgate", version, about = "HTTP gateway for the textgate backend")]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "TEXTGATE_PORT", default_value_t = textgate_gateway::config::DEFAULT_PORT)]
    port: u16,

    /// Base URL of the backend service.
    #[arg(long, env = "TEXTGATE_BACKEND_URL", default_value = textgate_gateway::config::DEFAULT_BACKEND_URL)]
    backend_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = GatewayConfig {
        port: cli.port,
        backend_url: cli.backend_url,
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("starting textgate on port {}", config.port);

    textgate_gateway::serve(listener, config).await
}
