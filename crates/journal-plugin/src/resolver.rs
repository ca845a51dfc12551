//! Template override resolution.
//!
//! A plugin may ship replacement content files under
//! `<plugin dir>/templates/<logical path>`. Resolution walks the plugin
//! table in discovery order and the first plugin with a matching file
//! wins. Results are never cached; each call re-checks the filesystem.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::loader::PluginLoader;

/// Resolves logical template paths against plugin overrides.
#[derive(Debug)]
pub struct TemplateResolver {
    /// Source of the ordered plugin table.
    loader: Arc<PluginLoader>,
}

impl TemplateResolver {
    /// Creates a resolver over the given loader's plugin table.
    pub fn new(loader: Arc<PluginLoader>) -> Self {
        Self { loader }
    }

    /// Resolves a logical template path.
    ///
    /// Returns the first matching plugin override, or the logical path
    /// unchanged when no plugin provides one ("use the built-in template").
    pub async fn resolve(&self, logical: &str) -> PathBuf {
        match self.resolve_override(logical).await {
            Some((path, _)) => path,
            None => PathBuf::from(logical),
        }
    }

    /// Like [`TemplateResolver::resolve`], but also names the plugin that
    /// provided the override. `None` means "use the built-in template".
    pub async fn resolve_override(&self, logical: &str) -> Option<(PathBuf, String)> {
        let logical_path = Path::new(logical);
        if !is_safe_relative(logical_path) {
            warn!(template = %logical, "Rejected template path with traversal components");
            return None;
        }

        for record in self.loader.all_info().await {
            let candidate = record.path.join("templates").join(logical_path);
            if candidate.exists() {
                debug!(
                    plugin = %record.name,
                    path = %candidate.display(),
                    "Using plugin template override"
                );
                return Some((candidate, record.name));
            }
        }

        None
    }
}

/// Accepts only plain relative paths: no root, no `..`, no drive prefixes.
///
/// Exposed so render-side callers can reject unsafe logical paths before
/// falling back to their own template root.
pub fn is_safe_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}
