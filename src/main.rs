//! siphon device-telemetry ingestion service.
//!
//! Main entry point: loads configuration, initializes structured logging,
//! and serves the ingestion endpoint until shutdown.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use siphon_api::{Config, RouterOptions};
use siphon_core::TracingSink;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from defaults, config.toml, and environment
    let config = Config::load()?;

    // Initialize tracing with structured logging
    init_tracing(&config.rust_log);

    info!(host = %config.host, port = config.port, "configuration loaded");

    let addr = config.parse_server_addr()?;
    let options = RouterOptions {
        sink: Arc::new(TracingSink::new()),
        max_body_bytes: config.max_body_bytes,
        request_timeout: Duration::from_secs(config.request_timeout),
    };

    info!(addr = %addr, "siphon is ready to receive device data");

    siphon_api::start_server(options, addr).await.context("server failed")?;

    info!("siphon shutdown complete");
    Ok(())
}

/// Initializes tracing from `RUST_LOG`, falling back to the configured
/// filter.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
