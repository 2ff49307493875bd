//! Tag endpoints

use crate::client::Client;
use crate::error::Result;
use crate::services::Uuid;
use serde::{Deserialize, Serialize};

/// A tag used to group tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    /// Tags use `id` on the wire, unlike most entities which use `_id`.
    #[serde(default)]
    pub id: Uuid,
    /// Tag name.
    #[serde(default)]
    pub name: String,
}

/// Facade over the tag endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TagsService<'a> {
    pub(crate) client: &'a Client,
}

impl TagsService<'_> {
    /// List all tags of the user (GET `/tags`).
    pub async fn list(&self) -> Result<Vec<Tag>> {
        self.client.get("/tags", &[]).await
    }
}
