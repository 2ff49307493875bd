//! Moderator endpoints
//!
//! These calls require admin rights on the authenticated account and fail
//! with `NotAuthorized` otherwise.

use crate::client::Client;
use crate::error::Result;
use crate::services::Timestamp;
use serde::{Deserialize, Serialize};

/// One entry of a user's history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserHistoryEntry {
    /// When the entry was recorded.
    #[serde(default)]
    pub timestamp: Timestamp,
    /// Entry payload, kept as raw JSON.
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Facade over the moderator endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AdminService<'a> {
    pub(crate) client: &'a Client,
}

impl AdminService<'_> {
    /// Fetch the history of a user (GET `/admin/user/:userId/history`).
    ///
    /// The identifier may be a user ID or a username, as accepted by the
    /// API.
    pub async fn user_history(&self, user_identifier: &str) -> Result<Vec<UserHistoryEntry>> {
        self.client
            .get(&format!("/admin/user/{user_identifier}/history"), &[])
            .await
    }
}
