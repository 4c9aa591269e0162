//! FitFlow host process: serves the server-rendered app, the WASM bundle,
//! and a health probe.

mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "fitflow host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(port = config.port, "fitflow listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
