// src/server/mod.rs
// =============================================================================
// The HTTP surface of the application.
//
// Routes:
// - GET /api/github/user?username=<name>  -> proxy lookup
// - GET /api/test                         -> health check
//
// Rust concepts:
// - axum Router: Maps paths to async handler functions
// - Shared state: The endpoint sits behind an Arc so every request can use it
// =============================================================================

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::TOKEN_ENV_VAR;
use crate::proxy::ProxyEndpoint;

pub use routes::Health;

pub fn router(endpoint: ProxyEndpoint) -> Router {
    Router::new()
        .route("/api/github/user", get(routes::github_user))
        .route("/api/test", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(endpoint))
}

// Binds `addr` and serves until the process is stopped
pub async fn serve(addr: SocketAddr, endpoint: ProxyEndpoint) -> Result<()> {
    if !endpoint.config().has_token() {
        tracing::warn!(
            "{} is not set, every lookup will answer 500 until it is configured",
            TOKEN_ENV_VAR
        );
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local = listener.local_addr().context("Failed to read bound address")?;
    tracing::info!(%local, api_base = %endpoint.config().api_base, "Listening");

    axum::serve(listener, router(endpoint))
        .await
        .context("HTTP server stopped unexpectedly")?;

    Ok(())
}
