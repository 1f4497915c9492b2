//! Clipboard capability.
//!
//! The orchestrator only needs "put this string on the clipboard".  The
//! [`Clipboard`] trait keeps the OS clipboard out of the orchestrator so it can
//! be exercised in tests; [`SystemClipboard`] is the real implementation.

pub mod system;

pub use system::SystemClipboard;

use thiserror::Error;

/// Errors that can surface while writing to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Could not open the system clipboard.
    #[error("cannot access clipboard: {0}")]
    Access(String),

    /// Could not write text to the system clipboard.
    #[error("cannot set clipboard text: {0}")]
    Set(String),
}

/// Write access to a clipboard.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
