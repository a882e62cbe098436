//! Trait abstractions for dependency injection and testability.
//!
//! The two external collaborators of the session controller are modeled
//! as traits so tests can script them:
//!
//! - [`ShortenTransport`] - the remote shorten endpoint
//! - [`Clipboard`] - the system clipboard write capability

pub mod clipboard;
pub mod transport;

pub use clipboard::{Clipboard, ClipboardError};
pub use transport::{ShortenTransport, TransportError};
