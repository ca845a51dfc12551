//! Route definitions for the journal presentation layer.
//!
//! Page routes render HTML at the root, JSON endpoints are mounted
//! under `/api`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(plugin_routes())
        .merge(auth_routes())
        .merge(health_routes());

    Router::new()
        .merge(page_routes())
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTML page routes rendered through the plugin-aware pipeline
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/login", get(handlers::pages::login))
        .route("/register", get(handlers::pages::register))
        .route("/submit", get(handlers::pages::submit))
        .route("/review", get(handlers::pages::review))
        .route("/admin", get(handlers::pages::admin))
}

/// Plugin introspection endpoints
fn plugin_routes() -> Router<AppState> {
    Router::new().route("/plugins", get(handlers::plugins::list_plugins))
}

/// Login notification endpoint for the upstream backend
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/notify-login", post(handlers::auth::notify_login))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
