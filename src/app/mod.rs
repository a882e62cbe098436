//! Application state and logic for the TUI.
//!
//! The [`App`] struct owns the session state record, the injected
//! collaborators (shorten transport and clipboard), the input cursor,
//! and the message channel that async completions report back on.
//! Everything mutates on the single event-loop task.

mod input;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Focus;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::clipboard::SystemClipboard;
use crate::session::{CopyTarget, SessionState, SubmitDisposition, COPY_ACK_MS};
use crate::shortener::{ShortenerClient, SHORTENER_BASE_URL};
use crate::traits::{Clipboard, ShortenTransport};

/// Main application state
pub struct App {
    /// The session state record (draft, result, history, pending,
    /// error, copy acknowledgment).
    pub session: SessionState,
    /// Cursor position in the draft, as a char index.
    pub cursor: usize,
    /// Current focus (input field vs link list).
    pub focus: Focus,
    /// Selected row in the link list: 0 = main result (when present),
    /// then history rows in order.
    pub links_index: usize,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Shorten transport (shared with spawned request tasks)
    transport: Arc<dyn ShortenTransport>,
    /// Clipboard write capability
    clipboard: Box<dyn Clipboard>,
    /// Service base address used to compose displayable short URLs
    base_url: String,
}

impl App {
    /// Create the production app: reqwest transport against the
    /// compiled-in service address, arboard clipboard.
    pub fn new() -> Self {
        Self::with_collaborators(
            Arc::new(ShortenerClient::new()),
            Box::new(SystemClipboard::new()),
            SHORTENER_BASE_URL.to_string(),
        )
    }

    /// Create an app with injected collaborators (used by tests).
    pub fn with_collaborators(
        transport: Arc<dyn ShortenTransport>,
        clipboard: Box<dyn Clipboard>,
        base_url: String,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: SessionState::new(),
            cursor: 0,
            focus: Focus::Input,
            links_index: 0,
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            transport,
            clipboard,
            base_url,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Trigger a submission from the current draft.
    ///
    /// While a request is outstanding this is a no-op (the submit
    /// affordance is inert). A whitespace-only draft sets the
    /// validation error without any network activity. Otherwise the
    /// request runs as a spawned task and reports back via
    /// [`AppMessage`].
    pub fn submit(&mut self) {
        match self.session.begin_submit() {
            SubmitDisposition::AlreadyPending => {}
            SubmitDisposition::EmptyDraft => self.mark_dirty(),
            SubmitDisposition::Started { url } => {
                self.mark_dirty();
                let transport = Arc::clone(&self.transport);
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let msg = match transport.shorten(&url).await {
                        Ok(token) => AppMessage::ShortenCompleted {
                            original: url,
                            token,
                        },
                        Err(e) => AppMessage::ShortenFailed {
                            error: e.to_string(),
                        },
                    };
                    let _ = tx.send(msg);
                });
            }
        }
    }

    /// Copy the selected link row's displayed text to the clipboard and
    /// schedule the acknowledgment expiry keyed to this copy.
    pub fn copy_selected(&mut self) {
        let Some((text, target)) = self.selected_link() else {
            return;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                let gen = self.session.copy_succeeded(target);
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(COPY_ACK_MS)).await;
                    let _ = tx.send(AppMessage::CopyAckExpired { gen });
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.session.copy_failed();
            }
        }
        self.mark_dirty();
    }

    /// Open the selected link row's displayed text in the default
    /// browser. Errors are ignored; the text stays visible for manual
    /// copying.
    pub fn open_selected(&self) {
        if let Some((text, _)) = self.selected_link() {
            let _ = open::that(text);
        }
    }

    /// Handle an async completion message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ShortenCompleted { original, token } => {
                tracing::info!(%original, %token, "shorten succeeded");
                self.session.apply_success(&original, &token, &self.base_url);
                self.cursor = 0;
                self.clamp_selection();
            }
            AppMessage::ShortenFailed { error } => {
                tracing::warn!(%error, "shorten request failed");
                self.session.apply_failure();
            }
            AppMessage::CopyAckExpired { gen } => {
                self.session.ack_expired(gen);
            }
        }
        self.mark_dirty();
    }

    /// Number of rows in the link list (main result + history).
    pub fn link_row_count(&self) -> usize {
        usize::from(self.session.result.is_some()) + self.session.history.len()
    }

    /// The selected row's displayed text and its copy identifier.
    ///
    /// Row 0 is the main result (composed URL); history rows carry the
    /// raw token exactly as stored.
    pub fn selected_link(&self) -> Option<(String, CopyTarget)> {
        let mut idx = self.links_index;
        if let Some(result) = &self.session.result {
            if idx == 0 {
                return Some((result.short.clone(), CopyTarget::Main));
            }
            idx -= 1;
        }
        self.session
            .history
            .get(idx)
            .map(|entry| (entry.short.clone(), CopyTarget::History(idx)))
    }

    /// Move focus to the link list, if there is anything to select.
    pub fn focus_links(&mut self) {
        if self.link_row_count() > 0 {
            self.focus = Focus::Links;
            self.clamp_selection();
            self.mark_dirty();
        }
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.mark_dirty();
    }

    pub fn select_prev_link(&mut self) {
        if self.links_index > 0 {
            self.links_index -= 1;
            self.mark_dirty();
        }
    }

    pub fn select_next_link(&mut self) {
        if self.links_index + 1 < self.link_row_count() {
            self.links_index += 1;
            self.mark_dirty();
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.link_row_count();
        if rows == 0 {
            self.links_index = 0;
            self.focus = Focus::Input;
        } else if self.links_index >= rows {
            self.links_index = rows - 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        use crate::traits::{ClipboardError, TransportError};

        struct NullTransport;

        #[async_trait::async_trait]
        impl ShortenTransport for NullTransport {
            async fn shorten(&self, _original_url: &str) -> Result<String, TransportError> {
                Err(TransportError::ConnectionFailed("test transport".into()))
            }
        }

        struct NullClipboard;

        impl Clipboard for NullClipboard {
            fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
                Ok(())
            }
        }

        Self::with_collaborators(
            Arc::new(NullTransport),
            Box::new(NullClipboard),
            "https://quicklink.test".to_string(),
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
