//! # geomon-devserver
//!
//! Composition root for local dashboard development.
//!
//! ## Responsibilities
//! - Load configuration (`geomon.toml`, env vars)
//! - Initialize `tracing`
//! - Build the router over the fixture directory, dist directory and a fresh
//!   in-memory device
//! - Bind to a TCP port and serve until Ctrl-C

use geomon_devserver::config::Config;
use geomon_devserver::router;
use geomon_devserver::state::MockDevice;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let app = router::build(&config.paths, MockDevice::default());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        address = %bind_addr,
        fixtures = %config.paths.fixtures_dir.display(),
        dist = %config.paths.dist_dir.display(),
        "geomon-devserver listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("geomon-devserver stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
