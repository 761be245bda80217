//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the top-level axum [`Router`].
///
/// Serves the built site directory with an SPA fallback to `index.html`,
/// so client-side routes resolve on hard refresh. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
#[must_use]
pub fn build(dist_dir: &str) -> Router {
    let index = std::path::Path::new(dist_dir).join("index.html");
    let site = ServeDir::new(dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
