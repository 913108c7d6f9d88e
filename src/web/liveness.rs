//! Liveness endpoint for the hosting platform's health checks.
//!
//! Shares nothing with the bot; it only proves the process is up.

use crate::errors::AppResult;
use axum::Router;
use axum::routing::get;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub const RUNNING: &str = "Bot está rodando!";

pub fn router() -> Router {
    Router::new().route("/", get(home))
}

async fn home() -> &'static str {
    RUNNING
}

/// Bind `0.0.0.0:<port>`.
pub async fn bind(port: u16) -> AppResult<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Liveness endpoint listening");
    Ok(listener)
}

/// Serve the liveness router until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
