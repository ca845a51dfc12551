//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Login notification pushed by the external backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginNotification {
    /// Backend user identifier.
    pub user_id: i64,
    /// Role of the user that logged in.
    pub user_role: String,
}
