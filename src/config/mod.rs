//! Configuration resolution for the Habitica client
//!
//! Credentials come from the `HABITICA_USER_ID`/`HABITICA_API_TOKEN`
//! environment variables when both are set, otherwise from a YAML file at an
//! explicit or platform-default path. Resolution happens once per CLI
//! invocation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{DEFAULT_BASE_URL, DEFAULT_CLIENT_ID, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

const ENV_USER_ID: &str = "HABITICA_USER_ID";
const ENV_API_TOKEN: &str = "HABITICA_API_TOKEN";

/// Settings required to talk to the Habitica API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the API, e.g. `https://habitica.com/api/v3`
    #[serde(default)]
    pub base_url: String,

    /// User ID, sent as the `x-api-user` header
    #[serde(default)]
    pub user_id: String,

    /// API token, sent as the `x-api-key` header
    #[serde(default)]
    pub api_token: String,
}

/// Options controlling how configuration is resolved
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit path to a YAML configuration file (the `--config` flag)
    pub config_path: Option<PathBuf>,

    /// Base URL override (the `--base-url` flag)
    pub base_url: Option<String>,
}

impl Config {
    /// Resolve configuration from the environment and optionally a YAML file.
    ///
    /// Order:
    /// 1. Environment variables `HABITICA_USER_ID` and `HABITICA_API_TOKEN`,
    ///    when both are set and non-empty.
    /// 2. Otherwise a config file at the explicit or platform-default path.
    ///    A `base_url` key in the file takes precedence over the override;
    ///    a missing key is filled in.
    pub fn load(opts: &LoadOptions) -> Result<Self> {
        let base_url = opts
            .base_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let user_id = env_var(ENV_USER_ID);
        let api_token = env_var(ENV_API_TOKEN);

        // Both values present in the environment: use them directly.
        if !user_id.is_empty() && !api_token.is_empty() {
            return Ok(Self {
                base_url,
                user_id,
                api_token,
            });
        }

        let path = match &opts.config_path {
            Some(path) => path.clone(),
            None => defaults::default_config_path().ok_or(Error::MissingCredentials)?,
        };

        if !path.exists() {
            return Err(Error::MissingCredentials);
        }

        let mut cfg = Self::load_from(&path)?;
        if cfg.base_url.is_empty() {
            cfg.base_url = base_url;
        }
        if cfg.user_id.is_empty() || cfg.api_token.is_empty() {
            return Err(Error::MissingCredentials);
        }

        Ok(cfg)
    }

    /// Load configuration from a specific YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

fn env_var(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
