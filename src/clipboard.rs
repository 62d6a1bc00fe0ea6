//! Clipboard access
//!
//! Write-only: the copy action hands over a literal string and never reads
//! the clipboard back.

use tracing::debug;

use crate::error::{BrowserError, BrowserResult};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> BrowserResult<()>;
}

/// The operating system clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn open() -> BrowserResult<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| BrowserError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> BrowserResult<()> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| BrowserError::Clipboard(e.to_string()))?;
        debug!(len = text.len(), "clipboard updated");
        Ok(())
    }
}

/// In-process clipboard for tests
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> BrowserResult<()> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Copy a record identifier verbatim
pub fn copy_identifier(clipboard: &mut dyn Clipboard, id: &str) -> BrowserResult<()> {
    clipboard.write_text(id)
}
