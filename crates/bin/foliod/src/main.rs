//! # foliod — folio site daemon
//!
//! Composition root that serves the built site.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Build the axum router: health check, static assets, SPA fallback
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use foliod::config::Config;
use foliod::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let app = router::build(&config.site.dist_dir);

    let bind_addr = config.bind_addr();
    tracing::info!("foliod listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install shutdown handler: {err}");
    }
}
