//! Webhook endpoints

use crate::client::Client;
use crate::error::Result;
use crate::services::{Timestamp, Uuid};
use serde::{Deserialize, Serialize};

/// A registered webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook identifier.
    #[serde(default)]
    pub id: Uuid,
    /// Target URL receiving the POSTs.
    #[serde(default)]
    pub url: String,
    /// Whether deliveries are active.
    #[serde(default)]
    pub enabled: bool,
    /// User-chosen label.
    #[serde(default)]
    pub label: String,
    /// One of `taskActivity`, `groupChatReceived`, `userActivity`,
    /// `questActivity`, `globalActivity`.
    #[serde(rename = "type", default)]
    pub webhook_type: String,
    /// Type-specific delivery options, kept as raw JSON.
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
    /// Registration time.
    #[serde(default)]
    pub created_at: Timestamp,
}

/// Facade over the webhook endpoints.
#[derive(Debug, Clone, Copy)]
pub struct WebhooksService<'a> {
    pub(crate) client: &'a Client,
}

impl WebhooksService<'_> {
    /// List all registered webhooks (GET `/user/webhook`).
    pub async fn list(&self) -> Result<Vec<Webhook>> {
        self.client.get("/user/webhook", &[]).await
    }
}
