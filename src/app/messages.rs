//! AppMessage enum for async communication within the application.

/// Messages received from async operations (the shorten request and the
/// copy acknowledgment timer). All state mutation happens on the event
/// loop when these are handled.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The shorten request completed with a 2xx and a token body.
    ShortenCompleted { original: String, token: String },
    /// The shorten request failed (any status or transport error).
    /// `error` carries the real cause for the log; the UI shows only
    /// the generic message.
    ShortenFailed { error: String },
    /// The 1500 ms acknowledgment window for the copy scheduled under
    /// `gen` has elapsed.
    CopyAckExpired { gen: u64 },
}
