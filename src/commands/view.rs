//! View command - render the collections page
//!
//! Mounts the browser, waits for its single fetch and prints the page.
//! Sections start collapsed; `--expand` and `--expand-all` open them.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use thiserror::Error;
use tracing::debug;

use index_browser::render::{self, Expansion, RenderOptions};
use index_browser::source::HttpCollectionSource;
use index_browser::{output, CollectionBrowser, Config, OutputFormat};

/// View command arguments
#[derive(Args)]
pub struct ViewArgs {
    /// Expand the named collection (repeatable)
    #[arg(short, long = "expand", value_name = "NAME")]
    expand: Vec<String>,

    /// Expand every collection
    #[arg(short = 'a', long, conflicts_with = "expand")]
    expand_all: bool,

    /// Add a column previewing each record's embedding vector
    #[arg(long)]
    embeddings: bool,
}

/// The fetch failed and the error banner has already been printed
#[derive(Debug, Error)]
#[error("{0}")]
pub struct FetchFailed(pub String);

/// Execute view command
pub async fn execute(args: ViewArgs, config: &Config) -> Result<()> {
    let source = HttpCollectionSource::new(config).context("Failed to prepare collections source")?;
    debug!(endpoint = source.endpoint(), "mounting collection browser");

    let options = RenderOptions {
        format: config.output_format,
        expansion: Expansion::from_flags(args.expand, args.expand_all),
        show_embeddings: args.embeddings,
        width: output::terminal_width(),
    };

    let mut browser = CollectionBrowser::mount(Arc::new(source));

    let show_progress =
        config.output_format != OutputFormat::Json && std::io::stderr().is_terminal();
    if show_progress {
        eprint!("{}", output::progress_line(render::LOADING));
    }
    let state = browser.settled().await;
    if show_progress {
        // clear the progress line
        eprint!("\r\x1b[2K");
    }

    match config.output_format {
        OutputFormat::Json => {
            let json = render::render_json(&state, &options).context("Failed to serialize page")?;
            println!("{}", json);
        }
        OutputFormat::Table | OutputFormat::Plain => {
            println!("{}", render::render_page(&state, &options));
        }
    }

    if !state.error.is_empty() {
        return Err(FetchFailed(state.error).into());
    }
    Ok(())
}
