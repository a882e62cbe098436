//! Clipboard trait abstraction.
//!
//! The session controller only ever writes text to the clipboard; no
//! read access is needed. The production implementation is
//! [`SystemClipboard`](crate::clipboard::SystemClipboard).

use thiserror::Error;

/// Clipboard write errors.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Trait for writing text to the system clipboard.
///
/// Modeled as a single pass/fail operation. Implementations must not
/// block the event loop for any meaningful time.
pub trait Clipboard: Send {
    /// Place `text` on the system clipboard.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
