//! pontobot library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod bot;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::parser::Cli;
use config::{Config, DEFAULT_LOG_LEVEL};
use crate::core::{EventRecorder, SystemClock};
use errors::AppResult;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing. RUST_LOG wins over the configured level.
pub fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LOG_LEVEL)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ .env is optional
    dotenvy::dotenv().ok();

    // 2️⃣ parse CLI / environment
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    // 3️⃣ validate configuration; anything missing stops us here
    let cfg = Config::from_cli(cli).inspect_err(|e| error!(error = %e, "Invalid configuration"))?;
    info!(config = ?cfg, "Starting pontobot v{}", env!("CARGO_PKG_VERSION"));

    // 4️⃣ store + schema, fatal on failure
    let store = db::connect(&cfg.database)
        .await
        .inspect_err(|e| error!(error = %e, "Could not initialize the timestamp store"))?;
    let recorder = EventRecorder::new(store, Arc::new(SystemClock), cfg.timezone);

    // 5️⃣ liveness endpoint, independent of the bot
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let listener = web::bind(cfg.port)
        .await
        .inspect_err(|e| error!(error = %e, port = cfg.port, "Could not bind liveness endpoint"))?;
    let liveness = tokio::spawn(web::serve(listener, async move {
        let _ = shutdown_rx.wait_for(|stop| *stop).await;
    }));

    // 6️⃣ chat client
    let mut client = bot::client(&cfg, recorder)
        .await
        .inspect_err(|e| error!(error = %e, "Could not build the chat client"))?;
    let result = tokio::select! {
        res = client.start() => res.map_err(errors::AppError::from),
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            Ok(())
        }
    };

    client.shard_manager.shutdown_all().await;
    let _ = shutdown_tx.send(true);
    if let Err(e) = liveness
        .await
        .inspect_err(|e| error!(error = %e, "Liveness task panicked or was cancelled"))?
    {
        error!(error = %e, "Liveness endpoint stopped with an error");
    }

    if let Err(e) = &result {
        error!(error = %e, "Chat client stopped with an error");
    }
    result
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
