//! Page handlers — every page renders through the plugin-aware pipeline.
//!
//! Form handling on these pages is client-side JavaScript talking to the
//! external backend; this layer only emits the rendered HTML.

use axum::extract::State;
use axum::response::Html;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state, "home").await
}

/// GET /login
pub async fn login(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state, "login").await
}

/// GET /register
pub async fn register(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state, "register").await
}

/// GET /submit
pub async fn submit(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state, "submit").await
}

/// GET /review
pub async fn review(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state, "review").await
}

/// GET /admin
pub async fn admin(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state, "admin").await
}

async fn render(state: &AppState, page: &str) -> Result<Html<String>, ApiError> {
    let logical = format!("content/{page}.html");
    let html = state.pipeline.render_page(page, &logical).await?;
    Ok(Html(html))
}
