//! Template lookup configuration.

use serde::{Deserialize, Serialize};

/// Built-in template settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Root directory holding the built-in content templates.
    #[serde(default = "default_template_directory")]
    pub directory: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            directory: default_template_directory(),
        }
    }
}

fn default_template_directory() -> String {
    "./templates".to_string()
}
