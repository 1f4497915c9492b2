//! System clipboard backed by the `arboard` crate.
//!
//! Every call opens a short-lived [`arboard::Clipboard`] handle rather than
//! sharing one, because the handle is not `Send` on all platforms.

use super::{Clipboard, ClipboardError};

/// The OS clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    /// Read the current plain-text content, `None` when empty or non-text.
    #[cfg(test)]
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let mut clipboard = open_clipboard()?;
        Ok(clipboard.get_text().ok())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = open_clipboard()?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Set(e.to_string()))
    }
}

fn open_clipboard() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))
}
