//! Command implementations for the CLI
//!
//! Each handler validates its flags, resolves configuration, builds one
//! client and performs exactly one API operation (the checklist toggle also
//! fetches the task first to validate the index). Output is a short
//! human-readable summary on stdout; errors bubble up to `main`.

use crate::client::Client;
use crate::config::{Config, LoadOptions};
use crate::error::Error;
use crate::services::{ScoreDirection, TaskKind, TasksFilter, TaskType, Uuid};
use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Global flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Explicit config file path (`--config`)
    pub config: Option<PathBuf>,

    /// API base URL override (`--base-url`)
    pub base_url: Option<String>,

    /// Verbose diagnostics (`--verbose`)
    pub verbose: bool,
}

/// Resolve configuration and build a client from the global flags.
fn build_client(args: &GlobalArgs) -> Result<Client> {
    let opts = LoadOptions {
        config_path: args.config.clone(),
        base_url: args.base_url.clone(),
    };
    let config = Config::load(&opts)?;
    if args.verbose {
        println!("Base URL: {}", config.base_url);
    }
    Ok(Client::new(&config)?)
}

/// Map an error to the process exit code.
///
/// Typed client errors carry their own code; anything else (flag
/// validation, unexpected failures) exits with 1.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>().map_or(1, Error::exit_code)
}

/// Connectivity check: fetch the authenticated user and print who we are.
pub async fn smoke_test(args: &GlobalArgs) -> Result<()> {
    let client = build_client(args)?;
    let user = client.user().get_current().await?;
    println!("{} Logged in as: {}", "✓".green(), user.profile.name);
    Ok(())
}

/// Create a todo, optionally with a checklist built from `--check` flags.
pub async fn todo_create(args: &GlobalArgs, text: &str, checks: &[String]) -> Result<()> {
    if text.trim().is_empty() {
        bail!("flag --text must not be empty");
    }

    let client = build_client(args)?;
    let task = client
        .tasks()
        .create_todo_with_checklist(text, checks)
        .await?;

    println!(
        "{} Todo created: {} (ID: {})",
        "✓".green(),
        task.text,
        task.id
    );
    if !task.checklist.is_empty() {
        println!("Checklist:");
        for item in &task.checklist {
            println!("  - {}", item.text);
        }
    }
    Ok(())
}

/// List the user's todos together with their checklist entries.
pub async fn todos_list(args: &GlobalArgs) -> Result<()> {
    let client = build_client(args)?;
    let tasks = client
        .tasks()
        .list(TasksFilter::kind(TaskKind::Todos))
        .await?;

    if tasks.is_empty() {
        println!("No todos found.");
        return Ok(());
    }

    for task in &tasks {
        let status = if task.completed { "x" } else { " " };
        println!("[{status}] {} (ID: {})", task.text, task.id);
        for item in &task.checklist {
            let sub_status = if item.completed { "x" } else { " " };
            println!("  - [{sub_status}] {}", item.text);
        }
    }
    Ok(())
}

/// Delete a todo by its ID.
pub async fn todo_delete(args: &GlobalArgs, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("flag --id must not be empty");
    }

    let client = build_client(args)?;
    client.tasks().delete(&Uuid::new(id)).await?;

    println!("{} Todo with ID {id} has been deleted.", "✓".green());
    Ok(())
}

/// Mark a todo as completed by scoring it up.
pub async fn todo_complete(args: &GlobalArgs, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("flag --id must not be empty");
    }

    let client = build_client(args)?;
    client
        .tasks()
        .score(&Uuid::new(id), ScoreDirection::Up)
        .await?;

    println!("{} Todo with ID {id} has been completed.", "✓".green());
    Ok(())
}

/// Toggle a checklist item of a todo by its 1-based index.
///
/// The todo is fetched first so the index can be validated against the
/// actual checklist before any write is issued.
pub async fn todo_check(args: &GlobalArgs, id: &str, index: usize) -> Result<()> {
    if id.trim().is_empty() {
        bail!("flag --id must not be empty");
    }
    if index == 0 {
        bail!("flag --index must be greater than zero");
    }

    let client = build_client(args)?;
    let task = client.tasks().get(&Uuid::new(id)).await?;

    if task.task_type != TaskType::Todo {
        bail!("task {id} is not a todo");
    }
    if task.checklist.is_empty() {
        bail!("todo {id} has no checklist items");
    }
    if index > task.checklist.len() {
        bail!(
            "flag --index is out of range: todo {id} only has {} checklist items",
            task.checklist.len()
        );
    }

    let item = &task.checklist[index - 1];
    client
        .tasks()
        .update_checklist_item_completed(&task.id, &item.id, !item.completed)
        .await?;

    println!(
        "{} Checklist item #{index} ({:?}) on todo {} has been toggled.",
        "✓".green(),
        item.text,
        task.id
    );
    Ok(())
}
