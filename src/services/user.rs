//! Endpoints around the currently authenticated user

use crate::client::Client;
use crate::error::Result;
use crate::services::{Timestamp, Uuid};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Habitica user, reduced to the fields clients typically need.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// User identifier (`_id` on the wire).
    #[serde(rename = "_id", default)]
    pub id: Uuid,
    /// Authentication details.
    #[serde(default)]
    pub auth: UserAuth,
    /// Public profile.
    #[serde(default)]
    pub profile: UserProfile,
    /// Game statistics.
    #[serde(default)]
    pub stats: UserStats,
    /// Preferences relevant to API behavior.
    #[serde(default)]
    pub preferences: UserPreferences,
    /// Inventory and currency.
    #[serde(default)]
    pub items: UserItems,
    /// Server-side feature flags, kept as raw JSON.
    #[serde(default)]
    pub flags: serde_json::Map<String, serde_json::Value>,
    /// Pending notifications.
    #[serde(default)]
    pub notifications: Vec<UserNotification>,
}

/// Authentication details of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAuth {
    /// Local (email and password) login block.
    #[serde(default)]
    pub local: UserAuthLocal,
}

/// Local (email and password) authentication details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAuthLocal {
    /// Email address of the account.
    #[serde(default)]
    pub email: String,
}

/// Public profile of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// About-me text.
    #[serde(default)]
    pub blurb: String,
    /// Avatar image URL (`imageUrl` on the wire).
    #[serde(default)]
    pub image_url: String,
}

/// Game statistics of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
    /// Character class (`warrior`, `wizard`, `healer` or `rogue`).
    #[serde(default)]
    pub class: String,
    /// Current health.
    #[serde(default)]
    pub hp: f64,
    /// Current mana.
    #[serde(default)]
    pub mp: f64,
    /// Experience into the current level.
    #[serde(default)]
    pub exp: f64,
    /// Gold.
    #[serde(default)]
    pub gp: f64,
    /// Character level.
    #[serde(default)]
    pub lvl: i64,
    /// Unspent attribute points.
    #[serde(default)]
    pub points: i64,
    /// Health ceiling (`maxHealth` on the wire).
    #[serde(rename = "maxHealth", default)]
    pub max_hp: f64,
    /// Mana ceiling (`maxMP` on the wire).
    #[serde(rename = "maxMP", default)]
    pub max_mp: f64,
    /// Active buffs, kept as raw JSON.
    #[serde(default)]
    pub buffs: serde_json::Map<String, serde_json::Value>,
    /// Experience required to reach the next level.
    #[serde(rename = "toNextLevel", default)]
    pub to_next_level: f64,
}

/// User preferences relevant to API behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Hour at which the user's day rolls over.
    #[serde(default)]
    pub day_start: i64,
    /// Interface language code.
    #[serde(default)]
    pub language: String,
    /// Selected background key.
    #[serde(default)]
    pub background: String,
    /// Timezone offset in minutes.
    #[serde(default)]
    pub timezone_offset: f64,
}

/// Inventory and currency of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItems {
    /// Gold balance.
    #[serde(default)]
    pub gold: f64,
    /// Gem balance.
    #[serde(default)]
    pub gems: i64,
    /// Equipment blocks (`gear` on the wire), kept as raw JSON.
    #[serde(rename = "gear", default)]
    pub equipment: serde_json::Map<String, serde_json::Value>,
    /// Pets by key with their growth value.
    #[serde(default)]
    pub pets: HashMap<String, i64>,
    /// Mounts by key; `true` when owned.
    #[serde(default)]
    pub mounts: HashMap<String, bool>,
    /// Key of the active mount.
    #[serde(default)]
    pub current_mount: String,
    /// Key of the active pet.
    #[serde(default)]
    pub current_pet: String,
}

/// A pending notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserNotification {
    /// Notification identifier.
    #[serde(default)]
    pub id: String,
    /// Notification kind (`type` on the wire).
    #[serde(rename = "type", default)]
    pub notification_type: String,
    /// Whether the user has seen it.
    #[serde(default)]
    pub seen: bool,
    /// Kind-specific payload, kept as raw JSON.
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    /// When the notification was raised.
    #[serde(default)]
    pub timestamp: Timestamp,
}

/// Facade over the user endpoints.
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    pub(crate) client: &'a Client,
}

impl UserService<'_> {
    /// Fetch the authenticated user (GET `/user`).
    pub async fn get_current(&self) -> Result<User> {
        self.client.get("/user", &[]).await
    }

    /// Fetch a page of the user's inbox (GET `/inbox/messages`).
    ///
    /// Page 0 requests the first page without a `page` parameter. The
    /// payload shape varies, so it is returned as raw JSON.
    pub async fn inbox(&self, page: u32) -> Result<serde_json::Value> {
        let query: Vec<(&str, String)> = if page > 0 {
            vec![("page", page.to_string())]
        } else {
            Vec::new()
        };
        self.client.get("/inbox/messages", &query).await
    }
}
