//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{convert_temp, serve_metrics, version, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Version endpoint
        .route("/", get(version))
        // Conversion endpoint
        .route("/convert-temp", get(convert_temp))
        // Metrics endpoint
        .route("/metrics", get(serve_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
