//! Read-only REST API over freshly generated dashboard tables.
//!
//! Every request re-samples, the way the dashboard re-renders:
//! - `/sectors`: current sector readings
//! - `/benchmarks`: facility benchmarks
//! - `/projections`: twelve-month projection with its baseline
//! - `/dashboard`: complete snapshot with headline totals
//!
//! Each endpoint accepts an optional `?seed=N` to reproduce a draw.

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

/// Immutable application state shared across all request handlers.
///
/// Holds no generator: each request builds its own random source, so
/// concurrent requests never contend for shared state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Seed applied when a request does not carry its own.
    pub seed: Option<u64>,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sectors", get(handlers::get_sectors))
        .route("/benchmarks", get(handlers::get_benchmarks))
        .route("/projections", get(handlers::get_projections))
        .route("/dashboard", get(handlers::get_dashboard))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
