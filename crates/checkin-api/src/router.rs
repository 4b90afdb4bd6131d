//! Route definitions for the Host Check-in HTTP API.
//!
//! The check-in form is accepted at `/` and at the configured route path
//! (default `/log-ips.php`, so existing clients keep working unchanged).

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{MethodRouter, get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and per-route middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let route_path = normalize_route_path(&state.config.server.route_path);

    let mut checkin = Router::new().route("/", checkin_method_router());
    if route_path != "/" {
        checkin = checkin.route(&route_path, checkin_method_router());
    }

    Router::new()
        .merge(checkin)
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// POST records a check-in; every other method gets the missing-input body.
fn checkin_method_router() -> MethodRouter<AppState> {
    post(handlers::checkin::check_in).fallback(handlers::checkin::no_post_data)
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Ensure the configured path starts with a single `/`.
fn normalize_route_path(path: &str) -> String {
    let trimmed = path.trim().trim_start_matches('/');
    format!("/{trimmed}")
}
