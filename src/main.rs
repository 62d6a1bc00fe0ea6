//! ixb - Index Browser CLI
//!
//! Fetches the collections exposed by a vector index backend and renders
//! them for inspection. Uses a current-thread tokio runtime; there is only
//! ever one request in flight.

use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};

use index_browser::logging::{initialize_logging, LoggingConfig};
use index_browser::{output, Config, OutputFormat};

mod commands;

/// Index Browser CLI
#[derive(Parser)]
#[command(name = "ixb")]
#[command(author, version, about = "Browse the collections of a vector index", long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Output format (table, json, plain)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Collections endpoint (default: http://localhost:9000/api/chroma-collections)
    #[arg(long, global = true, env = "IXB_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Show every collection with its records (collapsed unless expanded)
    View(commands::view::ViewArgs),

    /// Copy a record identifier to the clipboard
    Copy(commands::copy::CopyArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = Config::from_env();

    if let Some(endpoint) = cli.endpoint {
        cfg = cfg.with_endpoint(endpoint);
    }
    if let Some(timeout) = cli.timeout {
        cfg = cfg.with_timeout(timeout);
    }
    if let Some(format) = cli.format {
        match OutputFormat::parse(&format) {
            Some(fmt) => cfg = cfg.with_output_format(fmt),
            None => {
                output::error(format!(
                    "Unknown output format: {}. Expected table, json or plain",
                    format
                ));
                std::process::exit(1);
            }
        }
    }
    if cli.verbose {
        cfg = cfg.with_verbose(true);
    }

    initialize_logging(&LoggingConfig::from_environment(cfg.verbose));

    if !cfg.color_enabled
        || cfg.output_format == OutputFormat::Plain
        || !std::io::stdout().is_terminal()
    {
        colored::control::set_override(false);
    }

    if let Err(e) = cfg.validate() {
        output::error(e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::View(args) => commands::view::execute(args, &cfg).await,
        Commands::Copy(args) => commands::copy::execute(args).await,
    };

    if let Err(e) = result {
        // fetch failures are already on screen as the page's error banner
        if e.downcast_ref::<commands::view::FetchFailed>().is_none() {
            output::error(format!("{:#}", e));
        }
        std::process::exit(1);
    }

    Ok(())
}
