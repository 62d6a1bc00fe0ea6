//! Copy command - put a record identifier on the clipboard

use anyhow::{Context, Result};
use clap::Args;

use index_browser::clipboard::{copy_identifier, SystemClipboard};
use index_browser::output;

/// Copy command arguments
#[derive(Args)]
pub struct CopyArgs {
    /// Record identifier, copied exactly as given
    id: String,
}

/// Execute copy command
pub async fn execute(args: CopyArgs) -> Result<()> {
    let mut clipboard = SystemClipboard::open().context("Failed to open system clipboard")?;
    copy_identifier(&mut clipboard, &args.id).context("Failed to copy identifier")?;
    output::success(format!("Copied {}", args.id));
    Ok(())
}
