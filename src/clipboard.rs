//! System clipboard access via `arboard`.
//!
//! Self-contained module implementing the [`Clipboard`] trait over the
//! OS clipboard (NSPasteboard on macOS, X11/Wayland on Linux). No
//! coupling to UI, networking, or application state.

use crate::traits::{Clipboard, ClipboardError};

/// Production clipboard backed by `arboard`.
///
/// A fresh handle is opened per write, so a missing display server
/// surfaces as a copy failure rather than a startup failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
