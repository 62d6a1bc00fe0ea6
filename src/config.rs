//! Browser configuration module
//!
//! Handles the collections endpoint, request timeout and output preferences.
//! Values come from defaults, then environment variables, then CLI flags.

use std::env;

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/api/chroma-collections";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Output format for CLI responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
    /// Plain text (minimal formatting)
    Plain,
}

impl OutputFormat {
    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "plain" | "text" => Some(Self::Plain),
            _ => None,
        }
    }
}

/// Browser configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Collections endpoint (e.g., "http://localhost:9000/api/chroma-collections")
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Default output format
    pub output_format: OutputFormat,

    /// Enable colored output
    pub color_enabled: bool,

    /// Verbose mode
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_format: OutputFormat::Table,
            color_enabled: true,
            verbose: false,
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `IXB_ENDPOINT`: Collections endpoint URL
    /// - `IXB_TIMEOUT`: Request timeout in seconds
    /// - `IXB_OUTPUT_FORMAT`: Output format (table, json, plain)
    /// - `NO_COLOR`: Disable colored output (any value)
    /// - `IXB_VERBOSE`: Enable verbose mode (any value)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = env::var("IXB_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(timeout) = env::var("IXB_TIMEOUT") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config.timeout_secs = secs;
            }
        }

        if let Ok(format) = env::var("IXB_OUTPUT_FORMAT") {
            if let Some(fmt) = OutputFormat::parse(&format) {
                config.output_format = fmt;
            }
        }

        // NO_COLOR is a standard env var
        if env::var("NO_COLOR").is_ok() {
            config.color_enabled = false;
        }

        if env::var("IXB_VERBOSE").is_ok() {
            config.verbose = true;
        }

        config
    }

    /// Builder: set collections endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder: set request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Builder: set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Builder: set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!(
                "Invalid endpoint: {}. Must start with http:// or https://",
                self.endpoint
            ));
        }

        if self.timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.timeout_secs > 300 {
            return Err("Request timeout must be at most 300 seconds".to_string());
        }

        Ok(())
    }
}
