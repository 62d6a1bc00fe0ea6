//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with the
//! rendered page on stdout. Quiet by default: only warnings unless `-v` or an
//! explicit level is given.

use std::env;
use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration for the browser
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: Level,
    /// Force disable ANSI colors (detected from stderr if None)
    pub force_disable_ansi: Option<bool>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            force_disable_ansi: None,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Level precedence: `IXB_LOG_LEVEL` > `RUST_LOG` > default (WARN).
    /// `-v` on the command line overrides all of them with DEBUG.
    pub fn from_environment(verbose: bool) -> Self {
        let mut config = Self::default();

        if verbose {
            config.level = Level::DEBUG;
        } else if let Some(level) = env::var("IXB_LOG_LEVEL")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .and_then(|s| parse_level(&s))
        {
            config.level = level;
        }

        if env::var("NO_COLOR").is_ok() {
            config.force_disable_ansi = Some(true);
        }

        config
    }
}

fn parse_level(value: &str) -> Option<Level> {
    value.trim().to_uppercase().parse::<Level>().ok()
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn initialize_logging(config: &LoggingConfig) {
    let level = config.level.to_string().to_lowercase();
    let filter = EnvFilter::new(format!("index_browser={0},ixb={0}", level));
    let ansi = !config
        .force_disable_ansi
        .unwrap_or_else(|| !std::io::stderr().is_terminal());

    let _ = fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
