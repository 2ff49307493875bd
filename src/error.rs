//! Error types and handling for the Habitica client and CLI.
//!
//! Every failure mode of the crate is a variant of [`Error`]: configuration
//! resolution, request construction, the HTTP transport itself, errors
//! reported by the Habitica API, and response decoding. API errors carry the
//! HTTP status code so callers can branch without string matching.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Habitica client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error code used for failure responses whose body does not carry the
/// standard envelope.
pub const FALLBACK_ERROR_CODE: &str = "http_error";

/// Error type covering configuration, transport, API and decoding failures
#[derive(Error, Debug)]
pub enum Error {
    // ═══════════════════════════════════════════════════════════════
    // Configuration
    // ═══════════════════════════════════════════════════════════════
    /// Failed to read the configuration file
    #[error("failed to read config from {path}: {reason}")]
    ConfigRead {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        reason: String,
    },

    /// The configuration file exists but is not valid YAML
    #[error("configuration file {path} could not be parsed: {reason}")]
    ConfigParse {
        /// Path of the malformed file
        path: PathBuf,
        /// Parser diagnostic
        reason: String,
    },

    /// Neither the environment nor a config file provided credentials
    #[error(
        "Habitica credentials are missing - set HABITICA_USER_ID and \
         HABITICA_API_TOKEN or create a config file"
    )]
    MissingCredentials,

    // ═══════════════════════════════════════════════════════════════
    // Request construction
    // ═══════════════════════════════════════════════════════════════
    /// The configured base URL does not parse
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The offending URL string
        url: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The request body could not be serialized as JSON
    #[error("request body could not be serialized: {0}")]
    BodySerialize(#[source] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════
    // Transport & API
    // ═══════════════════════════════════════════════════════════════
    /// Network, TLS or timeout failure, surfaced unchanged from reqwest
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error reported by the Habitica API, either decoded from the standard
    /// envelope or synthesized from the raw response body
    #[error("{}", api_display(.code, .message, .status))]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// API error code string (e.g. `NotFound`), or
        /// [`FALLBACK_ERROR_CODE`] when the envelope was undecodable
        code: String,
        /// Human-readable message
        message: String,
    },

    // ═══════════════════════════════════════════════════════════════
    // Decoding
    // ═══════════════════════════════════════════════════════════════
    /// The response body could not be decoded into the expected type
    #[error("response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Display precedence for API errors: message, then code, then a generic
/// fallback naming the status.
fn api_display(code: &str, message: &str, status: &u16) -> String {
    if !message.is_empty() {
        message.to_string()
    } else if !code.is_empty() {
        code.to_string()
    } else {
        format!("Habitica API error (HTTP {status})")
    }
}

impl Error {
    /// Reports whether the error represents a 404 response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Reports whether the error represents a 401 response.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// HTTP status code carried by an API error, `None` for every other
    /// variant.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigRead { .. } | Self::ConfigParse { .. } | Self::MissingCredentials => 2,
            Self::InvalidBaseUrl { .. } | Self::BodySerialize(_) => 3,
            Self::Http(_) => 4,
            Self::Api { .. } | Self::Decode(_) => 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> Error {
        Error::Api {
            status,
            code: "SomeCode".to_string(),
            message: "some message".to_string(),
        }
    }

    #[test]
    fn test_is_not_found_matches_404_only() {
        assert!(api_error(404).is_not_found());
        assert!(!api_error(401).is_not_found());
        assert!(!api_error(500).is_not_found());
        assert!(!Error::MissingCredentials.is_not_found());
    }

    #[test]
    fn test_is_unauthorized_matches_401_only() {
        assert!(api_error(401).is_unauthorized());
        assert!(!api_error(404).is_unauthorized());
        assert!(!Error::MissingCredentials.is_unauthorized());
    }

    #[test]
    fn test_status_code_for_non_api_errors() {
        assert_eq!(api_error(418).status_code(), Some(418));
        assert_eq!(Error::MissingCredentials.status_code(), None);
    }

    #[test]
    fn test_api_display_prefers_message() {
        let err = Error::Api {
            status: 400,
            code: "BadRequest".to_string(),
            message: "text is required".to_string(),
        };
        assert_eq!(err.to_string(), "text is required");
    }

    #[test]
    fn test_api_display_falls_back_to_code() {
        let err = Error::Api {
            status: 400,
            code: "BadRequest".to_string(),
            message: String::new(),
        };
        assert_eq!(err.to_string(), "BadRequest");
    }

    #[test]
    fn test_api_display_generic_fallback() {
        let err = Error::Api {
            status: 502,
            code: String::new(),
            message: String::new(),
        };
        assert_eq!(err.to_string(), "Habitica API error (HTTP 502)");
    }

    #[test]
    fn test_exit_codes_are_nonzero() {
        assert_ne!(Error::MissingCredentials.exit_code(), 0);
        assert_ne!(api_error(500).exit_code(), 0);
    }
}
