//! `counter-feed-svc` — binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Load the TLS certificate/key pair and build the rustls config.
//! 4. Build the Axum router and start the TLS accept loop.
//!
//! The process runs until it receives SIGINT or SIGTERM.

mod config;
mod server;
mod telemetry;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        tls_port = cfg.tls_port,
        "counter-feed-svc starting"
    );

    // -----------------------------------------------------------------------
    // 3. TLS configuration
    // -----------------------------------------------------------------------
    let tls_config = server::tls::load_server_config(&cfg.tls_cert_path, &cfg.tls_key_path)?;

    // -----------------------------------------------------------------------
    // 4. HTTPS server
    // -----------------------------------------------------------------------
    let router = server::router::build();

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.tls_port).into();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "listening");

    tokio::select! {
        res = server::tls::serve(listener, tls_config, router) => res?,
        _ = shutdown_signal() => info!("shutdown signal received, stopping"),
    }

    Ok(())
}

/// Resolves when the process receives SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
