//! QuickLink TUI - a terminal client for the QuickLink URL shortener
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod clipboard;
pub mod logging;
pub mod session;
pub mod shortener;
pub mod traits;
pub mod ui;
