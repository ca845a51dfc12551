//! Plugin loader — discovers plugin directories, reads manifests, and runs
//! each plugin's registration exactly once.
//!
//! Discovery scans the immediate subdirectories of the plugins root, sorted
//! by name so discovery order (and template override precedence) is
//! deterministic. A load failure in one plugin never prevents the others
//! from loading.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use journal_core::AppResult;

use crate::hooks::registry::HookRegistry;
use crate::plugin::{Plugin, PluginManifest, PluginRecord};

/// Fixed-name entry file recognized in every plugin directory.
pub const PLUGIN_MANIFEST: &str = "plugin.toml";

/// Discovers and loads plugins, and owns the resulting plugin table.
///
/// Plugin code is compiled in and mapped to directory names via
/// [`PluginLoader::with_builtin`]. The table is populated once at startup
/// and read-only afterwards.
#[derive(Debug)]
pub struct PluginLoader {
    /// Hook registry handed to plugins at registration time.
    hooks: Arc<HookRegistry>,
    /// Compiled-in plugin implementations keyed by directory name.
    builtins: HashMap<String, Arc<dyn Plugin>>,
    /// Directory names skipped during discovery.
    disabled: Vec<String>,
    /// Discovered plugins in discovery order.
    table: RwLock<Vec<PluginRecord>>,
}

impl PluginLoader {
    /// Creates a loader with no compiled-in plugins.
    pub fn new(hooks: Arc<HookRegistry>) -> Self {
        Self {
            hooks,
            builtins: HashMap::new(),
            disabled: Vec::new(),
            table: RwLock::new(Vec::new()),
        }
    }

    /// Maps a compiled-in plugin implementation to a plugin directory name.
    pub fn with_builtin(mut self, name: &str, plugin: Arc<dyn Plugin>) -> Self {
        self.builtins.insert(name.to_string(), plugin);
        self
    }

    /// Sets the list of plugin directory names to skip.
    pub fn with_disabled(mut self, disabled: Vec<String>) -> Self {
        self.disabled = disabled;
        self
    }

    /// Loads all plugins under `root`, returning the loaded names.
    ///
    /// A missing root is not fatal — plugins are optional. Directories
    /// whose registration fails are logged and omitted from the plugin
    /// table. Already-loaded plugins are never re-executed.
    pub async fn load_all(&self, root: &Path) -> Vec<String> {
        if !root.is_dir() {
            warn!(
                root = %root.display(),
                "Plugins directory does not exist; no plugins loaded"
            );
            return Vec::new();
        }

        let mut dirs: Vec<(String, PathBuf)> = match std::fs::read_dir(root) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_dir())
                .map(|entry| {
                    (
                        entry.file_name().to_string_lossy().into_owned(),
                        entry.path(),
                    )
                })
                .collect(),
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Failed to list plugins directory");
                return Vec::new();
            }
        };

        // Discovery order: sorted directory listing
        dirs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut loaded = Vec::new();

        for (name, dir) in dirs {
            if name.starts_with('_') || name.starts_with('.') {
                continue;
            }
            if self.disabled.iter().any(|d| d == &name) {
                debug!(plugin = %name, "Plugin disabled by configuration");
                continue;
            }

            let manifest_path = dir.join(PLUGIN_MANIFEST);
            if !manifest_path.exists() {
                debug!(plugin = %name, "No manifest entry file; directory skipped");
                continue;
            }

            if self.is_loaded(&name).await {
                debug!(plugin = %name, "Plugin already loaded; entry not re-executed");
                continue;
            }

            let manifest = read_manifest(&manifest_path, &name);

            match self.run_entry(&name).await {
                Ok(()) => {
                    self.table.write().await.push(PluginRecord {
                        name: name.clone(),
                        path: dir,
                        manifest,
                    });
                    info!(plugin = %name, "Loaded plugin");
                    loaded.push(name);
                }
                Err(e) => {
                    error!(plugin = %name, error = %e, "Failed to load plugin");
                }
            }
        }

        loaded
    }

    /// Runs a plugin's registration exactly once.
    async fn run_entry(&self, name: &str) -> AppResult<()> {
        if let Some(plugin) = self.builtins.get(name) {
            return plugin.register(name, &self.hooks).await;
        }

        // Manifest-only plugins still get a record so template overrides work
        debug!(plugin = %name, "Plugin has no executable entry; template overrides only");
        Ok(())
    }

    /// Checks whether a plugin was loaded.
    pub async fn is_loaded(&self, name: &str) -> bool {
        let table = self.table.read().await;
        table.iter().any(|record| record.name == name)
    }

    /// Returns a plugin's directory path, if loaded.
    pub async fn plugin_path(&self, name: &str) -> Option<PathBuf> {
        let table = self.table.read().await;
        table
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.path.clone())
    }

    /// Returns the full plugin table in discovery order.
    pub async fn all_info(&self) -> Vec<PluginRecord> {
        let table = self.table.read().await;
        table.clone()
    }

    /// Returns the loaded plugin names in discovery order.
    pub async fn loaded_names(&self) -> Vec<String> {
        let table = self.table.read().await;
        table.iter().map(|record| record.name.clone()).collect()
    }

    /// Returns the hook registry plugins registered against.
    pub fn hooks(&self) -> &Arc<HookRegistry> {
        &self.hooks
    }
}

/// Parses a plugin manifest, falling back to defaults on any parse failure.
fn read_manifest(path: &Path, dir_name: &str) -> PluginManifest {
    let parsed = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .and_then(|c| c.try_deserialize::<PluginManifest>());

    let mut manifest = match parsed {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!(
                plugin = %dir_name,
                error = %e,
                "Unreadable plugin manifest; using defaults"
            );
            PluginManifest::default()
        }
    };

    if manifest.name.is_empty() {
        manifest.name = dir_name.to_string();
    }
    manifest
}
