//! `catalog`: product catalog service entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise the telemetry pipeline (JSON logs, optional OTLP export).
//! 3. Build the product store, seeding the sample catalogue if enabled.
//! 4. Build the Axum router and serve until Ctrl-C.

mod config;
mod server;
mod store;
mod telemetry;
mod validation;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use config::Config;
use server::state::AppState;
use store::{seed, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(cfg.otel_exporter_otlp_endpoint.as_deref(), &cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        environment = %cfg.environment,
        "catalog starting"
    );

    // -----------------------------------------------------------------------
    // 3. Product store
    // -----------------------------------------------------------------------
    let store = if cfg.seed_sample_data {
        MemoryStore::with_products(seed::sample_products())
    } else {
        MemoryStore::new()
    };
    info!(products = store.len(), "product store ready");

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let state = AppState::new(Arc::new(store), &cfg);
    let router = server::router::build(state);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("catalog stopped");
    if cfg.otel_exporter_otlp_endpoint.is_some() {
        opentelemetry::global::shutdown_tracer_provider();
    }
    Ok(())
}

/// Resolves on the first Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
