//! Default configuration values

use std::path::PathBuf;

/// Default base URL of the Habitica v3 API
pub const DEFAULT_BASE_URL: &str = "https://habitica.com/api/v3";

/// Default absolute request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default `User-Agent` header value
pub const DEFAULT_USER_AGENT: &str = concat!("habitica-cli/", env!("CARGO_PKG_VERSION"));

/// Default `x-client` header value identifying this tool to Habitica
pub const DEFAULT_CLIENT_ID: &str = "habitica-cli";

/// Platform default path of the configuration file
/// (`<config_dir>/habitica-cli/config.yaml`)
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("habitica-cli").join("config.yaml"))
}
