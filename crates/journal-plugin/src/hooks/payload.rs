//! Hook payload definitions.
//!
//! Each hook receives exactly one payload. The payloads observed in the
//! system are typed variants; `Custom` carries a free-form key-value map
//! for hooks the core knows nothing about.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload handed to every callback invoked for a hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HookPayload {
    /// Page content about to be rendered.
    Render(RenderPayload),
    /// A user logged in at the external backend.
    Login(LoginPayload),
    /// Arbitrary data keyed by string, for plugin-defined hooks.
    Custom(HashMap<String, serde_json::Value>),
}

/// Payload for `beforeContentRender` and `onTemplateOverride`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPayload {
    /// Logical page identifier (e.g. `"home"`).
    pub page: String,
    /// The content file the pipeline resolved for this page.
    pub template_path: PathBuf,
    /// Rendered HTML, mutable by callbacks.
    pub content: String,
}

/// Payload for `onUserLogin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    /// Backend user identifier.
    pub user_id: i64,
    /// Role reported by the backend (`author`, `reviewer`, `editor`, `admin`).
    pub user_role: String,
    /// When the login happened.
    pub timestamp: DateTime<Utc>,
}

impl LoginPayload {
    /// Creates a login payload stamped with the current time.
    pub fn now(user_id: i64, user_role: &str) -> Self {
        Self {
            user_id,
            user_role: user_role.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl HookPayload {
    /// Creates an empty custom payload.
    pub fn custom() -> Self {
        Self::Custom(HashMap::new())
    }

    /// Inserts a typed value. No-op for non-custom payloads.
    pub fn with_value(mut self, key: &str, value: serde_json::Value) -> Self {
        if let Self::Custom(data) = &mut self {
            data.insert(key.to_string(), value);
        }
        self
    }

    /// Inserts a string value.
    pub fn with_str(self, key: &str, value: &str) -> Self {
        self.with_value(key, serde_json::json!(value))
    }

    /// Inserts an integer value.
    pub fn with_int(self, key: &str, value: i64) -> Self {
        self.with_value(key, serde_json::json!(value))
    }

    /// Gets a custom value by key.
    pub fn get_value(&self, key: &str) -> Option<&serde_json::Value> {
        match self {
            Self::Custom(data) => data.get(key),
            _ => None,
        }
    }

    /// Gets a custom string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_value(key).and_then(|v| v.as_str())
    }

    /// Gets a custom i64 value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_value(key).and_then(|v| v.as_i64())
    }

    /// Borrows the render payload, if this is one.
    pub fn as_render(&self) -> Option<&RenderPayload> {
        match self {
            Self::Render(render) => Some(render),
            _ => None,
        }
    }

    /// Consumes self into the render payload, if this is one.
    pub fn into_render(self) -> Option<RenderPayload> {
        match self {
            Self::Render(render) => Some(render),
            _ => None,
        }
    }

    /// Borrows the login payload, if this is one.
    pub fn as_login(&self) -> Option<&LoginPayload> {
        match self {
            Self::Login(login) => Some(login),
            _ => None,
        }
    }

    /// Whether two payloads are the same variant.
    pub fn same_variant(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
