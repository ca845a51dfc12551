//! Plugin introspection handlers (admin plugin listing).

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, PluginInfoResponse};
use crate::state::AppState;

/// GET /api/plugins
pub async fn list_plugins(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<PluginInfoResponse>>> {
    let mut plugins = Vec::new();

    for record in state.loader.all_info().await {
        let hooks = state.hooks.hooks_owned_by(&record.name).await;
        plugins.push(PluginInfoResponse {
            name: record.name,
            display_name: record.manifest.name,
            path: record.path.display().to_string(),
            version: record.manifest.version,
            description: record.manifest.description,
            author: record.manifest.author,
            hooks,
        });
    }

    Json(ApiResponse::ok(plugins))
}
