//! Application builder — wires the plugin system, render pipeline, and
//! router into an Axum app.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tracing::info;

use journal_core::config::AppConfig;
use journal_core::error::AppError;
use journal_plugin::{HookDispatcher, HookRegistry, Plugin, PluginLoader, TemplateResolver};
use journal_render::RenderPipeline;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state.
///
/// Constructs the hook registry, runs plugin discovery (when
/// `plugins.auto_load` is set), and assembles the render pipeline on
/// top. `builtins` maps plugin directory names to their compiled-in
/// implementations.
pub async fn build_state(
    config: AppConfig,
    builtins: Vec<(&str, Arc<dyn Plugin>)>,
) -> AppState {
    let hooks = Arc::new(HookRegistry::new());

    let mut loader = PluginLoader::new(Arc::clone(&hooks))
        .with_disabled(config.plugins.disabled.clone());
    for (name, plugin) in builtins {
        loader = loader.with_builtin(name, plugin);
    }
    let loader = Arc::new(loader);

    if config.plugins.auto_load {
        let loaded = loader.load_all(Path::new(&config.plugins.directory)).await;
        info!(count = loaded.len(), plugins = ?loaded, "Plugin discovery complete");
    }

    let dispatcher = Arc::new(HookDispatcher::new(Arc::clone(&hooks)));
    let resolver = Arc::new(TemplateResolver::new(Arc::clone(&loader)));
    let pipeline = Arc::new(RenderPipeline::new(
        Arc::clone(&resolver),
        Arc::clone(&dispatcher),
        config.templates.directory.clone(),
    ));

    AppState {
        config: Arc::new(config),
        hooks,
        dispatcher,
        loader,
        pipeline,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the server with the given configuration and built-in plugins.
pub async fn run_server(
    config: AppConfig,
    builtins: Vec<(&str, Arc<dyn Plugin>)>,
) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, builtins).await;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Journal server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
