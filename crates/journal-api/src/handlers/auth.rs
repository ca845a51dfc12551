//! Login notification handler.
//!
//! Authentication itself lives in the upstream journal backend; this
//! endpoint only lets it announce a successful login so plugins
//! listening on the login hook can react.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::dto::request::LoginNotification;
use crate::dto::response::{ApiResponse, NotifyLoginResponse};
use crate::state::AppState;

/// POST /api/auth/notify-login
pub async fn notify_login(
    State(state): State<AppState>,
    Json(body): Json<LoginNotification>,
) -> Json<ApiResponse<NotifyLoginResponse>> {
    debug!(user_id = body.user_id, role = %body.user_role, "login notification received");

    state
        .pipeline
        .notify_login(body.user_id, &body.user_role)
        .await;

    Json(ApiResponse::ok(NotifyLoginResponse { accepted: true }))
}
