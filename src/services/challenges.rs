//! Challenge endpoints

use crate::client::Client;
use crate::error::Result;
use crate::services::Uuid;
use serde::{Deserialize, Serialize};

/// A Habitica challenge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Challenge identifier (`_id` on the wire).
    #[serde(rename = "_id", default)]
    pub id: Uuid,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Abbreviated name, also used as the challenge tag.
    #[serde(default)]
    pub short_name: String,
    /// Challenge description.
    #[serde(default)]
    pub description: String,
    /// User ID of the creator (`leader` on the wire).
    #[serde(rename = "leader", default)]
    pub leader_id: Uuid,
    /// Group hosting the challenge (`group` on the wire).
    #[serde(rename = "group", default)]
    pub group_id: Uuid,
    /// Number of participants.
    #[serde(default)]
    pub member_count: i64,
    /// Gem prize awarded to the winner.
    #[serde(default)]
    pub prize: i64,
    /// Whether the challenge is still running (`isActive` on the wire).
    #[serde(rename = "isActive", default)]
    pub active: bool,
}

/// Facade over the challenge endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ChallengesService<'a> {
    pub(crate) client: &'a Client,
}

impl ChallengesService<'_> {
    /// Fetch a single challenge (GET `/challenges/:id`).
    pub async fn get(&self, id: &Uuid) -> Result<Challenge> {
        self.client.get(&format!("/challenges/{id}"), &[]).await
    }
}
