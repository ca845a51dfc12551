//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Directory scanned for plugin subdirectories.
    #[serde(default = "default_plugin_directory")]
    pub directory: String,
    /// Whether to load plugins on startup.
    #[serde(default = "default_true")]
    pub auto_load: bool,
    /// Plugin directory names that are skipped during discovery.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            directory: default_plugin_directory(),
            auto_load: true,
            disabled: Vec::new(),
        }
    }
}

fn default_plugin_directory() -> String {
    "./plugins".to_string()
}

fn default_true() -> bool {
    true
}
