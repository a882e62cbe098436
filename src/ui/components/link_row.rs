//! Link Row Component
//!
//! One displayed short-URL row: selection marker, the link text, and
//! the copy affordance ("Copy" / "Copied ✓").

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_COPIED, COLOR_DIM, COLOR_LINK};

/// Configuration for rendering one link row
#[derive(Debug, Clone)]
pub struct LinkRowConfig<'a> {
    /// The displayed link text (copied and opened verbatim)
    pub text: &'a str,
    /// Whether this row is the current selection
    pub selected: bool,
    /// Whether this row currently shows the copy acknowledgment
    pub acknowledged: bool,
}

impl<'a> LinkRowConfig<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            selected: false,
            acknowledged: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn acknowledged(mut self, acknowledged: bool) -> Self {
        self.acknowledged = acknowledged;
        self
    }
}

/// Build the line for a link row.
pub fn link_row_line<'a>(config: &LinkRowConfig<'a>) -> Line<'a> {
    let marker = if config.selected { "▸ " } else { "  " };

    let mut link_style = Style::default().fg(COLOR_LINK);
    if config.selected {
        link_style = link_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let (copy_label, copy_style) = if config.acknowledged {
        ("  Copied ✓", Style::default().fg(COLOR_COPIED))
    } else {
        ("  Copy", Style::default().fg(COLOR_DIM))
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(COLOR_DIM)),
        Span::styled(config.text, link_style),
        Span::styled(copy_label, copy_style),
    ])
}
