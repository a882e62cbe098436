//! Shorten transport trait abstraction.
//!
//! Abstracts the remote shorten endpoint so the session controller can
//! be driven by a scripted transport in tests. The production
//! implementation is [`ShortenerClient`](crate::shortener::ShortenerClient).

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a shorten request.
///
/// The UI collapses all of these into the single generic failure
/// message; the variants exist so logs keep the real cause.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for issuing shorten requests.
///
/// One operation: submit a candidate URL, receive the short-code token
/// from the response body. The body is opaque text, never parsed.
#[async_trait]
pub trait ShortenTransport: Send + Sync {
    /// POST the candidate URL to the shorten endpoint.
    ///
    /// # Returns
    /// The raw response body token on 2xx, or a [`TransportError`] for
    /// any non-2xx status or transport-level failure.
    async fn shorten(&self, original_url: &str) -> Result<String, TransportError>;
}
