//! Shop and market endpoints

use crate::client::Client;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An item offered in the market.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    /// Stable item key.
    #[serde(default)]
    pub key: String,
    /// Display name.
    #[serde(default)]
    pub text: String,
    /// Flavor text.
    #[serde(default)]
    pub notes: String,
    /// Price in gold.
    #[serde(default)]
    pub value: f64,
    /// Purchase category (`purchaseType` on the wire), e.g. `gear`.
    #[serde(default)]
    pub purchase_type: String,
    /// Sprite class naming the item art.
    #[serde(default)]
    pub class: String,
}

/// Facade over the shop endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ShopsService<'a> {
    pub(crate) client: &'a Client,
}

impl ShopsService<'_> {
    /// List the items the user can currently buy
    /// (GET `/user/inventory/buy`).
    pub async fn market(&self) -> Result<Vec<ShopItem>> {
        self.client.get("/user/inventory/buy", &[]).await
    }
}
