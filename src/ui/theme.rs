//! Color theme constants for the QuickLink UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and focused elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Short URL links - indigo, matching the service branding
pub const COLOR_LINK: Color = Color::Rgb(79, 70, 229); // #4F46E5

/// Copy acknowledgment - green
pub const COLOR_COPIED: Color = Color::Rgb(34, 197, 94); // #22C55E

/// Error messages - red
pub const COLOR_ERROR: Color = Color::Red;

/// Submit affordance while a request is outstanding - muted
pub const COLOR_PENDING: Color = Color::Rgb(165, 180, 252); // #A5B4FC

/// Background for the input box
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);
