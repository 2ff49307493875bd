//! Command-line interface argument parsing
//!
//! Defines all CLI commands and their arguments using Clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Habitica CLI - Manage your Habitica todos from the terminal
#[derive(Parser, Debug)]
#[command(name = "habitica")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for managing Habitica todos and checklists via the v3 REST API")]
#[command(long_about = concat!(
    "Habitica CLI (v", env!("CARGO_PKG_VERSION"), ")\n",
    "A CLI tool for managing Habitica todos and checklists via the v3 REST API.\n\n",
    "Credentials come from the HABITICA_USER_ID and HABITICA_API_TOKEN environment\n",
    "variables or from a YAML config file (see --config). Running without a\n",
    "subcommand performs a connectivity check against the authenticated user."
))]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Habitica API base URL (defaults to https://habitica.com/api/v3)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Subcommand to run; omitted for the connectivity check.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a todo, optionally with checklist entries
    ///
    /// Examples:
    ///   habitica todo --text "Shopping" --check "Milk" --check "Bread"
    ///   habitica --config local.yaml todo --text "Shopping"
    #[command(display_order = 1)]
    Todo {
        /// Title of the todo (required)
        #[arg(long, required = true)]
        text: String,

        /// A checklist entry (can be specified multiple times)
        #[arg(long = "check", value_name = "TEXT")]
        checks: Vec<String>,
    },

    /// List your todos together with their checklist entries
    ///
    /// Examples:
    ///   habitica todos
    ///   habitica --config local.yaml todos
    #[command(visible_alias = "list")]
    #[command(display_order = 2)]
    Todos,

    /// Delete a todo by its ID
    ///
    /// Examples:
    ///   habitica todo-delete --id "37ceed6f-0772-43bb-a177-39d3074f75b7"
    #[command(display_order = 3)]
    TodoDelete {
        /// ID of the todo to delete (required)
        #[arg(long, required = true)]
        id: String,
    },

    /// Mark a todo as completed by scoring it up
    ///
    /// Examples:
    ///   habitica todo-complete --id "37ceed6f-0772-43bb-a177-39d3074f75b7"
    #[command(display_order = 4)]
    TodoComplete {
        /// ID of the todo to complete (required)
        #[arg(long, required = true)]
        id: String,
    },

    /// Toggle a checklist item of a todo by its 1-based index
    ///
    /// Fetches the todo first to validate the index, then flips the item's
    /// completed state.
    ///
    /// Examples:
    ///   habitica todo-check --id "37ceed6f-0772-43bb-a177-39d3074f75b7" --index 1
    #[command(display_order = 5)]
    TodoCheck {
        /// ID of the todo that owns the checklist item (required)
        #[arg(long, required = true)]
        id: String,

        /// 1-based index of the checklist item to toggle (required)
        #[arg(long, required = true)]
        index: usize,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}
