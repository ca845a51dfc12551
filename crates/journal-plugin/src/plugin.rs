//! Plugin model: the behavior trait, manifest metadata, and the record the
//! loader stores for every discovered plugin directory.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use journal_core::AppResult;

use crate::hooks::registry::HookRegistry;

/// Trait implemented by every compiled-in plugin.
#[async_trait]
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Called exactly once when the plugin is loaded, so it can register
    /// its hook callbacks. `plugin_name` is the plugin's directory name and
    /// should be used as the owner on every registration.
    async fn register(&self, plugin_name: &str, hooks: &HookRegistry) -> AppResult<()>;
}

/// Metadata declared by a plugin in its `plugin.toml` entry file.
///
/// Every field is optional; defaults are supplied for plugins that do not
/// declare their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Display name. Falls back to the directory name when empty.
    #[serde(default)]
    pub name: String,
    /// Plugin version string.
    #[serde(default = "default_version")]
    pub version: String,
    /// Plugin description.
    #[serde(default = "default_description")]
    pub description: String,
    /// Author or maintainer.
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: default_version(),
            description: default_description(),
            author: default_author(),
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_description() -> String {
    "No description provided".to_string()
}

fn default_author() -> String {
    "Unknown".to_string()
}

/// A discovered plugin. Created once per plugin directory containing a
/// manifest; never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginRecord {
    /// Plugin identifier, derived from the directory name.
    pub name: String,
    /// Filesystem location of the plugin directory.
    pub path: PathBuf,
    /// Declared (or defaulted) metadata.
    pub manifest: PluginManifest,
}
