//! EasyJournal Server — plugin-aware presentation layer for an academic
//! journal submission system.
//!
//! Main entry point that wires the plugin framework, render pipeline, and
//! HTTP surface together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use journal_api::app::run_server;
use journal_core::config::AppConfig;
use journal_plugin::Plugin;
use plugin_user_activity::UserActivityPlugin;
use plugin_welcome::WelcomePlugin;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting EasyJournal v{}", env!("CARGO_PKG_VERSION"));

    let builtins: Vec<(&str, Arc<dyn Plugin>)> = vec![
        ("welcome", Arc::new(WelcomePlugin::new())),
        ("user_activity", Arc::new(UserActivityPlugin::new())),
    ];

    if let Err(e) = run_server(config, builtins).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, journal_core::AppError> {
    let env = std::env::var("EASYJOURNAL_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
