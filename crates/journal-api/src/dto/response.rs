//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of loaded plugins.
    pub plugins_loaded: usize,
}

/// One installed plugin, for the admin plugin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfoResponse {
    /// Plugin identifier (directory name).
    pub name: String,
    /// Display name from the manifest.
    pub display_name: String,
    /// Plugin directory path.
    pub path: String,
    /// Declared version.
    pub version: String,
    /// Declared description.
    pub description: String,
    /// Declared author.
    pub author: String,
    /// Hook names this plugin registered for.
    pub hooks: Vec<String>,
}

/// Acknowledgement for backend event notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyLoginResponse {
    /// Whether the event was dispatched to plugins.
    pub accepted: bool,
}
