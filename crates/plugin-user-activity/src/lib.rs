//! User activity plugin.
//!
//! Subscribes to `onUserLogin` and keeps a bounded in-memory log of recent
//! logins, alongside a structured tracing event per login. The log backs
//! the admin activity view.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use journal_core::AppResult;
use journal_plugin::hooks::names;
use journal_plugin::{DEFAULT_PRIORITY, HookCallback, HookPayload, HookRegistry, Plugin};

/// Most recent logins kept in memory.
const ACTIVITY_LOG_CAPACITY: usize = 100;

/// One recorded login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginEvent {
    /// Backend user identifier.
    pub user_id: i64,
    /// Role reported at login time.
    pub user_role: String,
    /// When the login happened.
    pub timestamp: DateTime<Utc>,
}

/// Plugin entry point for the `user_activity` plugin directory.
#[derive(Debug, Default)]
pub struct UserActivityPlugin {
    /// Recent logins, newest last.
    log: Arc<RwLock<Vec<LoginEvent>>>,
}

impl UserActivityPlugin {
    /// Creates the plugin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded logins, oldest first.
    pub async fn recent_logins(&self) -> Vec<LoginEvent> {
        self.log.read().await.clone()
    }
}

#[async_trait]
impl Plugin for UserActivityPlugin {
    async fn register(&self, plugin_name: &str, hooks: &HookRegistry) -> AppResult<()> {
        info!(plugin = %plugin_name, "Registering user activity plugin");
        hooks
            .register(
                names::ON_USER_LOGIN,
                Arc::new(LoginRecorderHook {
                    log: self.log.clone(),
                }),
                DEFAULT_PRIORITY,
                plugin_name,
            )
            .await;
        Ok(())
    }
}

/// Records login payloads into the shared activity log.
#[derive(Debug)]
struct LoginRecorderHook {
    log: Arc<RwLock<Vec<LoginEvent>>>,
}

#[async_trait]
impl HookCallback for LoginRecorderHook {
    async fn invoke(&self, payload: &HookPayload) -> AppResult<Option<HookPayload>> {
        let Some(login) = payload.as_login() else {
            return Ok(None);
        };

        info!(
            user_id = login.user_id,
            user_role = %login.user_role,
            "User login recorded"
        );

        let mut log = self.log.write().await;
        log.push(LoginEvent {
            user_id: login.user_id,
            user_role: login.user_role.clone(),
            timestamp: login.timestamp,
        });
        if log.len() > ACTIVITY_LOG_CAPACITY {
            let excess = log.len() - ACTIVITY_LOG_CAPACITY;
            log.drain(..excess);
        }

        Ok(None)
    }
}
