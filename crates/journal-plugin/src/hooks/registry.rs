//! Hook registry — plugins register callbacks by hook name with priority ordering.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error};

use super::callback::HookCallback;

/// Priority used when a plugin does not care about ordering.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Entry in the hook registry. Immutable once registered.
#[derive(Debug)]
struct HookEntry {
    /// The callback.
    callback: Arc<dyn HookCallback>,
    /// Priority (lower = earlier execution).
    priority: i32,
    /// Plugin that registered this callback; empty for built-ins.
    owner: String,
}

/// Registry of hook callbacks organized by hook name.
///
/// Hook names are opaque strings; the registry has no knowledge of their
/// semantics. Duplicate registrations of the same callback are allowed.
#[derive(Debug)]
pub struct HookRegistry {
    /// Hook name → list of entries, kept sorted by priority.
    hooks: RwLock<HashMap<String, Vec<HookEntry>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a callback for a hook name.
    ///
    /// The entry list is re-sorted on every insert with a stable sort, so a
    /// late registration with a low priority still runs before earlier
    /// higher-priority ones, and equal priorities keep registration order.
    ///
    /// Returns `false` only for an empty hook name, which is a programmer
    /// error rather than a runtime condition.
    pub async fn register(
        &self,
        hook: &str,
        callback: Arc<dyn HookCallback>,
        priority: i32,
        owner: &str,
    ) -> bool {
        if hook.is_empty() {
            error!(owner = %owner, "Rejected hook registration with empty hook name");
            return false;
        }

        let mut hooks = self.hooks.write().await;
        let entries = hooks.entry(hook.to_string()).or_default();

        entries.push(HookEntry {
            callback,
            priority,
            owner: owner.to_string(),
        });

        // Stable: ties keep relative registration order
        entries.sort_by_key(|e| e.priority);

        debug!(
            hook = %hook,
            owner = %owner,
            priority = priority,
            "Hook callback registered"
        );
        true
    }

    /// Returns a priority-ordered snapshot of `(callback, owner)` pairs for
    /// a hook name. An unregistered name yields an empty vec, never an error.
    pub async fn entries(&self, hook: &str) -> Vec<(Arc<dyn HookCallback>, String)> {
        let hooks = self.hooks.read().await;
        hooks
            .get(hook)
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| (e.callback.clone(), e.owner.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of callbacks registered for a hook name.
    pub async fn callback_count(&self, hook: &str) -> usize {
        let hooks = self.hooks.read().await;
        hooks.get(hook).map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns all hook names with at least one registration.
    pub async fn hook_names(&self) -> Vec<String> {
        let hooks = self.hooks.read().await;
        hooks.keys().cloned().collect()
    }

    /// Returns the hook names a given owner has registered for.
    pub async fn hooks_owned_by(&self, owner: &str) -> Vec<String> {
        let hooks = self.hooks.read().await;
        let mut names: Vec<String> = hooks
            .iter()
            .filter(|(_, entries)| entries.iter().any(|e| e.owner == owner))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
