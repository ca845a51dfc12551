//! Application state shared across all handlers.

use std::sync::Arc;

use journal_core::AppConfig;
use journal_plugin::{HookDispatcher, HookRegistry, PluginLoader};
use journal_render::RenderPipeline;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Plugin hook registry (read-mostly after startup).
    pub hooks: Arc<HookRegistry>,
    /// Hook dispatcher.
    pub dispatcher: Arc<HookDispatcher>,
    /// Plugin loader and table.
    pub loader: Arc<PluginLoader>,
    /// Page render pipeline.
    pub pipeline: Arc<RenderPipeline>,
}
