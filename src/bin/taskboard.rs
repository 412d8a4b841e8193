//! Runs the taskboard HTTP service.
//!
//! Usage:
//!
//! ```text
//! taskboard [--host <ip>] [--port <port>] [--log-filter <directive>]
//! ```
//!
//! Each flag may also be supplied through `TASKBOARD_HOST`, `TASKBOARD_PORT`
//! and `TASKBOARD_LOG`. `RUST_LOG` takes precedence over `--log-filter`. The
//! process serves until it receives Ctrl-C and all state is discarded on
//! exit.

use std::sync::Arc;

use clap::Parser;
use eyre::WrapErr;
use taskboard::{
    config::ServerConfig,
    http::{self, AppState},
    task::adapters::memory::{InMemoryTaskRepository, TaskStore},
    telemetry,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::parse();
    telemetry::init(&config.log_filter)?;
    let addr = config.socket_addr()?;

    let store = Arc::new(TaskStore::new());
    let repository = Arc::new(InMemoryTaskRepository::new(store));
    let state = AppState::new(repository);

    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("bind listener on {addr}"))?;
    http::serve(listener, state, shutdown_signal())
        .await
        .wrap_err("serve HTTP requests")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
