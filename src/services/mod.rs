//! Typed facades over the Habitica API surface
//!
//! Each facade borrows the [`Client`] and groups the endpoints of one API
//! area, so call sites read as `client.tasks().list(...)` rather than raw
//! paths. Facades are cheap to construct; grab one per call.

use crate::client::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod admin;
pub mod challenges;
pub mod content;
pub mod groups;
pub mod shops;
pub mod tags;
pub mod tasks;
pub mod user;
pub mod webhooks;

pub use admin::{AdminService, UserHistoryEntry};
pub use challenges::{Challenge, ChallengesService};
pub use content::{Content, ContentService};
pub use groups::{Group, GroupsService};
pub use shops::{ShopItem, ShopsService};
pub use tags::{Tag, TagsService};
pub use tasks::{
    ChecklistItem, ScoreDirection, Task, TaskCreateRequest, TaskKind, TaskType, TaskUpdateRequest,
    TasksFilter, TasksService,
};
pub use user::{User, UserService};
pub use webhooks::{Webhook, WebhooksService};

/// An identifier as handed out by the API.
///
/// Kept as an opaque string; the API guarantees UUID shape but nothing in
/// this crate depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuid(String);

impl Uuid {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Uuid {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Uuid {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An ISO 8601 timestamp as returned by the API.
///
/// Kept as a string to avoid committing to a particular sub-second or
/// timezone format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// The timestamp as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the timestamp is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Timestamp {
    fn from(ts: String) -> Self {
        Self(ts)
    }
}

impl Client {
    /// Endpoints around the currently authenticated user.
    #[must_use]
    pub fn user(&self) -> UserService<'_> {
        UserService { client: self }
    }

    /// Task endpoints (todos, habits, dailies, rewards).
    #[must_use]
    pub fn tasks(&self) -> TasksService<'_> {
        TasksService { client: self }
    }

    /// Group endpoints (party, guilds, tavern).
    #[must_use]
    pub fn groups(&self) -> GroupsService<'_> {
        GroupsService { client: self }
    }

    /// Challenge endpoints.
    #[must_use]
    pub fn challenges(&self) -> ChallengesService<'_> {
        ChallengesService { client: self }
    }

    /// The static game content endpoint.
    #[must_use]
    pub fn content(&self) -> ContentService<'_> {
        ContentService { client: self }
    }

    /// Tag endpoints.
    #[must_use]
    pub fn tags(&self) -> TagsService<'_> {
        TagsService { client: self }
    }

    /// Shop and market endpoints.
    #[must_use]
    pub fn shops(&self) -> ShopsService<'_> {
        ShopsService { client: self }
    }

    /// Webhook endpoints.
    #[must_use]
    pub fn webhooks(&self) -> WebhooksService<'_> {
        WebhooksService { client: self }
    }

    /// Moderator endpoints. Calls fail for accounts without admin rights.
    #[must_use]
    pub fn admin(&self) -> AdminService<'_> {
        AdminService { client: self }
    }
}
