//! Axum router assembly.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::PathsConfig;
use crate::state::MockDevice;

/// Build the top-level axum [`Router`].
///
/// Nests the fixture API under `/mock` and serves the built dashboard for
/// every other path, answering unknown paths with `index.html` so client-side
/// routes survive a reload. Includes a [`TraceLayer`] that logs each request.
pub fn build(paths: &PathsConfig, device: MockDevice) -> Router {
    let dashboard = ServeDir::new(&paths.dist_dir)
        .fallback(ServeFile::new(paths.dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .nest("/mock", crate::mock::routes(&paths.fixtures_dir))
        .fallback_service(dashboard)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(device))
}

async fn health_check() -> &'static str {
    "OK"
}
