//! The static game content endpoint

use crate::client::Client;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The static content payload (GET `/content`), reduced to its top-level
/// sections. Each section is kept as raw JSON; callers pick out what they
/// need.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Equipment and consumables.
    #[serde(default)]
    pub items: serde_json::Map<String, serde_json::Value>,
    /// Hatchable pets.
    #[serde(default)]
    pub pets: serde_json::Map<String, serde_json::Value>,
    /// Ridable mounts.
    #[serde(default)]
    pub mounts: serde_json::Map<String, serde_json::Value>,
    /// Quest definitions.
    #[serde(default)]
    pub quests: serde_json::Map<String, serde_json::Value>,
    /// Purchasable backgrounds.
    #[serde(default)]
    pub backgrounds: serde_json::Map<String, serde_json::Value>,
}

/// Facade over the static content endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ContentService<'a> {
    pub(crate) client: &'a Client,
}

impl ContentService<'_> {
    /// Fetch the full static content payload (GET `/content`).
    ///
    /// The payload is large (several megabytes); fetch it once and reuse.
    pub async fn get(&self) -> Result<Content> {
        self.client.get("/content", &[]).await
    }
}
