//! Task endpoints: todos, habits, dailies and rewards

use crate::client::Client;
use crate::error::Result;
use crate::services::{Timestamp, Uuid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a task as stored on the task itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Scored up or down any number of times per day.
    Habit,
    /// Resets on the user's day rollover.
    Daily,
    /// One-off item, completed once.
    #[default]
    Todo,
    /// Purchasable with in-game gold.
    Reward,
}

impl TaskType {
    /// The wire representation of the type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Habit => "habit",
            Self::Daily => "daily",
            Self::Todo => "todo",
            Self::Reward => "reward",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The plural task category accepted by the list endpoint's `type` filter.
///
/// Distinct from [`TaskType`]: the filter uses plural names and adds the
/// `completedTodos` pseudo-category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// All habits.
    Habits,
    /// All dailies (the API spells the plural `dailys`).
    Dailys,
    /// Open todos.
    Todos,
    /// All rewards.
    Rewards,
    /// Recently completed todos, which `Todos` does not include.
    CompletedTodos,
}

impl TaskKind {
    /// The query-string value for this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Habits => "habits",
            Self::Dailys => "dailys",
            Self::Todos => "todos",
            Self::Rewards => "rewards",
            Self::CompletedTodos => "completedTodos",
        }
    }
}

/// Restricts the result set of [`TasksService::list`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TasksFilter {
    /// Only return tasks of this category. `None` returns everything.
    pub kind: Option<TaskKind>,
}

impl TasksFilter {
    /// Filter down to a single category.
    #[must_use]
    pub fn kind(kind: TaskKind) -> Self {
        Self { kind: Some(kind) }
    }

    fn to_query(self) -> Vec<(&'static str, String)> {
        match self.kind {
            Some(kind) => vec![("type", kind.as_str().to_string())],
            None => Vec::new(),
        }
    }
}

/// Direction for scoring a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDirection {
    /// Positive click; completes a todo.
    Up,
    /// Negative click.
    Down,
}

impl ScoreDirection {
    /// The path segment for this direction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A Habitica task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier (`_id` on the wire).
    #[serde(rename = "_id", default)]
    pub id: Uuid,
    /// Owning user.
    #[serde(default)]
    pub user_id: Uuid,
    /// Title shown in task lists.
    #[serde(default)]
    pub text: String,
    /// Free-form notes below the title.
    #[serde(default)]
    pub notes: String,
    /// Task kind (`type` on the wire).
    #[serde(rename = "type", default)]
    pub task_type: TaskType,
    /// Accumulated value driving reward and damage calculations.
    #[serde(default)]
    pub value: f64,
    /// Difficulty multiplier (0.1, 1, 1.5 or 2).
    #[serde(default)]
    pub priority: f64,
    /// Creation time.
    #[serde(default)]
    pub created_at: Timestamp,
    /// Last modification time.
    #[serde(default)]
    pub updated_at: Timestamp,
    /// IDs of the tags attached to this task.
    #[serde(default)]
    pub tags: Vec<Uuid>,
    /// Whether a todo or daily is done.
    #[serde(default)]
    pub completed: bool,
    /// Checklist entries of a todo or daily.
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// One of `str`, `int`, `con`, `per`.
    #[serde(default)]
    pub attribute: String,
}

/// An entry of a todo or daily checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Item identifier; empty on new items and then omitted from requests.
    #[serde(default, skip_serializing_if = "Uuid::is_empty")]
    pub id: Uuid,
    /// Entry text.
    #[serde(default)]
    pub text: String,
    /// Whether the entry is checked off.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completed: bool,
}

/// Fields accepted when creating a task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreateRequest {
    /// Title of the new task.
    pub text: String,
    /// Optional notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Kind of task to create (`type` on the wire).
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Difficulty multiplier; the server default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    /// Tags to attach on creation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Uuid>,
    /// Initial checklist entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistItem>,
    /// Governing attribute (`str`, `int`, `con` or `per`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl TaskCreateRequest {
    /// A bare request of the given type with every optional field unset.
    #[must_use]
    pub fn new(text: impl Into<String>, task_type: TaskType) -> Self {
        Self {
            text: text.into(),
            notes: None,
            task_type,
            priority: None,
            tags: Vec::new(),
            checklist: Vec::new(),
            attribute: None,
        }
    }
}

/// Fields accepted when updating a task. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdateRequest {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// New difficulty multiplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    /// Replacement tag set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Uuid>>,
    /// Replacement checklist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<ChecklistItem>>,
    /// New governing attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

/// Facade over the task endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TasksService<'a> {
    pub(crate) client: &'a Client,
}

impl TasksService<'_> {
    /// List the current user's tasks (GET `/tasks/user`), optionally
    /// restricted to one category.
    pub async fn list(&self, filter: TasksFilter) -> Result<Vec<Task>> {
        self.client.get("/tasks/user", &filter.to_query()).await
    }

    /// Fetch a single task by ID (GET `/tasks/:id`).
    pub async fn get(&self, id: &Uuid) -> Result<Task> {
        self.client.get(&format!("/tasks/{id}"), &[]).await
    }

    /// Create a task (POST `/tasks/user`).
    pub async fn create(&self, req: &TaskCreateRequest) -> Result<Task> {
        self.client.post("/tasks/user", req).await
    }

    /// Create a todo with a checklist built from plain strings.
    ///
    /// Empty strings are skipped. The todo is created with priority 1 and
    /// the `str` attribute, matching the website's defaults.
    pub async fn create_todo_with_checklist(
        &self,
        text: &str,
        checklist: &[String],
    ) -> Result<Task> {
        let req = TaskCreateRequest {
            priority: Some(1.0),
            attribute: Some("str".to_string()),
            checklist: build_checklist(checklist),
            ..TaskCreateRequest::new(text, TaskType::Todo)
        };
        self.create(&req).await
    }

    /// Update an existing task (PUT `/tasks/:id`).
    pub async fn update(&self, id: &Uuid, req: &TaskUpdateRequest) -> Result<Task> {
        self.client.put(&format!("/tasks/{id}"), req).await
    }

    /// Delete a task (DELETE `/tasks/:id`).
    pub async fn delete(&self, id: &Uuid) -> Result<()> {
        self.client.delete(&format!("/tasks/{id}")).await
    }

    /// Score a task up or down (POST `/tasks/:id/score/:direction`).
    ///
    /// Scoring a todo up marks it completed.
    pub async fn score(&self, id: &Uuid, direction: ScoreDirection) -> Result<()> {
        self.client
            .post_unit(&format!("/tasks/{id}/score/{}", direction.as_str()))
            .await
    }

    /// Set the completed flag of one checklist item
    /// (PUT `/tasks/:id/checklist/:itemId`).
    pub async fn update_checklist_item_completed(
        &self,
        task_id: &Uuid,
        item_id: &Uuid,
        completed: bool,
    ) -> Result<()> {
        self.client
            .put_unit(
                &format!("/tasks/{task_id}/checklist/{item_id}"),
                &serde_json::json!({ "completed": completed }),
            )
            .await
    }
}

/// Turn plain strings into unchecked checklist items, skipping empties.
fn build_checklist(items: &[String]) -> Vec<ChecklistItem> {
    items
        .iter()
        .filter(|text| !text.is_empty())
        .map(|text| ChecklistItem {
            id: Uuid::default(),
            text: text.clone(),
            completed: false,
        })
        .collect()
}
