//! Application builder: wires router, middleware and state into an Axum app.

use std::time::Duration;

use axum::{Router, middleware as axum_middleware};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;
    let cors = build_cors_layer(&server.cors);
    let timeout = Duration::from_secs(server.request_timeout_seconds);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
