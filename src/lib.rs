#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! # Habitica CLI
//!
//! A command-line tool and client library for the Habitica v3 REST API.
//!
//! ## Architecture
//!
//! This library is organized into several key modules:
//!
//! - **[`error`]** - Error types and classification helpers
//! - **[`config`]** - Configuration resolution (environment and YAML file)
//! - **[`client`]** - HTTP transport and response envelope decoding
//! - **[`services`]** - Typed facades per API area (user, tasks, groups, ...)
//! - **[`cli`]** / **[`commands`]** - Argument parsing and command handlers
//!
//! ## Library use
//!
//! ```no_run
//! use habitica_cli::config::{Config, LoadOptions};
//! use habitica_cli::services::{TaskKind, TasksFilter};
//! use habitica_cli::Client;
//!
//! # async fn demo() -> habitica_cli::Result<()> {
//! let config = Config::load(&LoadOptions::default())?;
//! let client = Client::new(&config)?;
//!
//! let todos = client.tasks().list(TasksFilter::kind(TaskKind::Todos)).await?;
//! for todo in &todos {
//!     println!("{} {}", todo.id, todo.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;

/// Client type alias for convenience
pub use client::Client;

/// Error type alias for convenience
pub use error::{Error, Result};

/// Configuration type alias for convenience
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name
pub const NAME: &str = "habitica";
