//! Browser error types
//!
//! Every way a fetch can fail collapses into one of these variants. The view
//! only ever shows the rendered message, so `Display` is the user-facing text.

use thiserror::Error;

/// Fallback text when a failure carries no message of its own
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors surfaced by the browser library
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The request never produced a response (DNS, refused, timeout, ...)
    #[error("Failed to reach {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("Failed to fetch collections (HTTP {status})")]
    Status { status: u16 },

    /// The body was not valid JSON
    #[error("Failed to parse collections response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing to the system clipboard failed
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure without any usable description
    #[error("{}", UNKNOWN_ERROR)]
    Unknown,
}

impl BrowserError {
    /// Create a transport error for the given endpoint
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Message shown in the error banner, never empty
    pub fn banner_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Result type alias for browser operations
pub type BrowserResult<T> = std::result::Result<T, BrowserError>;
