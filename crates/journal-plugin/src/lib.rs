//! # journal-plugin
//!
//! Plugin framework for the EasyJournal presentation layer. Provides:
//!
//! - Hook registry with priority-ordered, name-keyed registration
//! - Hook dispatcher with best-effort, failure-isolated execution
//! - Plugin discovery and exactly-once loading from a plugins directory
//! - Template override resolution (first discovered plugin wins)

pub mod hooks;
pub mod loader;
pub mod plugin;
pub mod resolver;

pub use hooks::callback::{FnCallback, HookCallback};
pub use hooks::dispatcher::HookDispatcher;
pub use hooks::payload::{HookPayload, LoginPayload, RenderPayload};
pub use hooks::registry::{DEFAULT_PRIORITY, HookRegistry};
pub use loader::{PLUGIN_MANIFEST, PluginLoader};
pub use plugin::{Plugin, PluginManifest, PluginRecord};
pub use resolver::{TemplateResolver, is_safe_relative};

/// Prelude for plugin implementations.
pub mod prelude {
    pub use async_trait::async_trait;

    pub use crate::hooks::callback::{FnCallback, HookCallback};
    pub use crate::hooks::names;
    pub use crate::hooks::payload::{HookPayload, LoginPayload, RenderPayload};
    pub use crate::hooks::registry::{DEFAULT_PRIORITY, HookRegistry};
    pub use crate::plugin::{Plugin, PluginManifest};

    pub use journal_core::{AppError, AppResult};
}
