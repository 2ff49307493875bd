//! Group endpoints: party, guilds and the tavern

use crate::client::Client;
use crate::error::Result;
use crate::services::Uuid;
use serde::{Deserialize, Serialize};

/// A Habitica group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group identifier (`_id` on the wire).
    #[serde(rename = "_id", default)]
    pub id: Uuid,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Group description.
    #[serde(default)]
    pub description: String,
    /// One of `party`, `guild`, `tavern`.
    #[serde(rename = "type", default)]
    pub group_type: String,
    /// User ID of the leader (`leader` on the wire).
    #[serde(rename = "leader", default)]
    pub leader_id: Uuid,
    /// Number of members.
    #[serde(default)]
    pub member_count: i64,
    /// `private` or `public`.
    #[serde(default)]
    pub privacy: String,
}

/// Facade over the group endpoints.
#[derive(Debug, Clone, Copy)]
pub struct GroupsService<'a> {
    pub(crate) client: &'a Client,
}

impl GroupsService<'_> {
    /// Fetch a single group (GET `/groups/:id`).
    ///
    /// The well-known identifiers `party` and `habitrpg` (the tavern) are
    /// accepted by the API in place of a UUID.
    pub async fn get(&self, id: &Uuid) -> Result<Group> {
        self.client.get(&format!("/groups/{id}"), &[]).await
    }
}
