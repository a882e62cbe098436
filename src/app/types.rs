//! Type definitions for the application state.

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The URL input field.
    #[default]
    Input,
    /// The link list (main result + history rows).
    Links,
}
