//! Main entry point for the travel planner backend.
//!
//! This file initializes tracing, parses and validates configuration, connects
//! the store, and only then binds the Axum server. Any failure before the
//! server starts is fatal and exits with a non-zero status.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use travel_backend::config::Config;
use travel_backend::database::{Database, MemoryStore};
use travel_backend::{app, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::parse();
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("fatal startup error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;
    let secret = config.signing_secret()?;

    let state = if config.uses_memory_store() {
        tracing::warn!("using in-memory store; data will not survive a restart");
        AppState::new(Arc::new(MemoryStore::new()), &config, secret)?
    } else {
        let db = Database::connect(&config.database_url, config.store_timeout())
            .await
            .context("failed to connect to database")?;
        tracing::info!("connected to database");
        AppState::new(Arc::new(db), &config, secret)?
    };

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app(state, &config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
