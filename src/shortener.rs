//! Shortener API client for backend communication.
//!
//! This module provides the HTTP client for the QuickLink shorten
//! endpoint. The contract is deliberately small: one POST carrying the
//! candidate URL as JSON, one plain-text token back.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::traits::{ShortenTransport, TransportError};

/// Compiled-in service base address. Not user-configurable at runtime;
/// tests override it via [`ShortenerClient::with_base_url`].
pub const SHORTENER_BASE_URL: &str = "https://quicklink-backend-ih4p.onrender.com";

/// Request body for the shorten endpoint.
#[derive(Debug, Clone, Serialize)]
struct ShortenRequest<'a> {
    #[serde(rename = "originalUrl")]
    original_url: &'a str,
}

/// Client for the QuickLink shorten endpoint.
///
/// Owns the base URL and a reusable reqwest client. The full
/// displayable short URL is composed by the caller from
/// [`base_url`](Self::base_url) and the returned token.
pub struct ShortenerClient {
    /// Base URL for the shortener service
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl ShortenerClient {
    /// Create a new client pointing at the default service address.
    pub fn new() -> Self {
        Self::with_base_url(SHORTENER_BASE_URL.to_string())
    }

    /// Create a new client with a custom base URL (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Convert a reqwest error to a [`TransportError`].
    fn convert_error(err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::ConnectionFailed(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

impl Default for ShortenerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortenTransport for ShortenerClient {
    async fn shorten(&self, original_url: &str) -> Result<String, TransportError> {
        let url = format!("{}/shorten", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&ShortenRequest { original_url })
            .send()
            .await
            .map_err(Self::convert_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TransportError::ServerError { status, message });
        }

        // The body is the short-code token as opaque plain text.
        response
            .text()
            .await
            .map_err(|e| TransportError::InvalidBody(e.to_string()))
    }
}
