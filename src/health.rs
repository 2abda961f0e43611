//! Liveness endpoint for external uptime monitors.
//!
//! Owns no state and calls into none of the bot logic; it only confirms the
//! process is alive.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tracing::info;

async fn ping() -> &'static str {
    "Bot is running!"
}

/// Serves `GET /` on `0.0.0.0:<port>` until the process exits.
pub async fn serve(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new().route("/", get(ping));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind health endpoint on {addr}"))?;
    info!(%addr, "health endpoint listening");

    axum::serve(listener, app)
        .await
        .context("health endpoint terminated")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ping_reports_running() {
        assert_eq!(ping().await, "Bot is running!");
    }
}
