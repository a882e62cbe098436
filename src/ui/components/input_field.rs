//! Input Field Component
//!
//! A single-line text input with focus handling, a visible cursor, and
//! placeholder text. Rounded borders to match the rest of the UI.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering the input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Current value of the input
    pub value: &'a str,
    /// Cursor position as a char index into `value`
    pub cursor: usize,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Placeholder text shown while empty
    pub placeholder: &'a str,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(value: &'a str, cursor: usize) -> Self {
        Self {
            value,
            cursor,
            focused: false,
            placeholder: "",
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Height of the input box (border + content + border).
pub const INPUT_FIELD_HEIGHT: u16 = 3;

/// Render the input field.
///
/// When the value is wider than the box, a window ending no earlier
/// than the cursor is shown so the cursor stays visible while typing.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let border_color = if config.focused {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let inner_width = area.width.saturating_sub(2) as usize;

    let line = if config.value.is_empty() && !config.focused {
        Line::from(Span::styled(
            config.placeholder,
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        styled_value_line(config, inner_width)
    };

    let input = Paragraph::new(line).block(block);
    frame.render_widget(input, area);
}

/// Build the value line with the cursor rendered as a reversed cell,
/// windowed so the cursor fits within `width` columns.
fn styled_value_line<'a>(config: &InputFieldConfig<'a>, width: usize) -> Line<'a> {
    let chars: Vec<char> = config.value.chars().collect();
    let cursor = config.cursor.min(chars.len());

    // Walk back from the cursor until the window is full.
    let mut start = cursor;
    let mut used = 1; // reserve one column for the cursor cell
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    let before: String = chars[start..cursor].iter().collect();
    let at: String = chars
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let mut after: String = chars[cursor.saturating_add(1).min(chars.len())..]
        .iter()
        .collect();

    // Trim the tail to what still fits.
    let mut remaining = width.saturating_sub(before.width() + 1);
    let mut tail = String::new();
    for c in after.chars() {
        let w = c.width().unwrap_or(0);
        if w > remaining {
            break;
        }
        remaining -= w;
        tail.push(c);
    }
    after = tail;

    let text_style = Style::default().fg(COLOR_ACCENT);
    if config.focused {
        Line::from(vec![
            Span::styled(before, text_style),
            Span::styled(at, text_style.add_modifier(Modifier::REVERSED)),
            Span::styled(after, text_style),
        ])
    } else {
        Line::from(Span::styled(
            format!("{}{}{}", before, at, after),
            Style::default().fg(COLOR_DIM),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = InputFieldConfig::new("example.com", 4)
            .focused(true)
            .placeholder("Paste your long URL here...");
        assert_eq!(config.value, "example.com");
        assert_eq!(config.cursor, 4);
        assert!(config.focused);
        assert_eq!(config.placeholder, "Paste your long URL here...");
    }

    #[test]
    fn test_cursor_line_splits_around_cursor() {
        let config = InputFieldConfig::new("abc", 1).focused(true);
        let line = styled_value_line(&config, 40);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "abc");
        assert_eq!(line.spans[1].content.as_ref(), "b");
    }

    #[test]
    fn test_cursor_at_end_gets_spacer_cell() {
        let config = InputFieldConfig::new("ab", 2).focused(true);
        let line = styled_value_line(&config, 40);
        assert_eq!(line.spans[1].content.as_ref(), " ");
    }

    #[test]
    fn test_long_value_windows_to_cursor() {
        let value = "x".repeat(100);
        let config = InputFieldConfig::new(&value, 100).focused(true);
        let line = styled_value_line(&config, 10);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(rendered.len() <= 10);
        // Cursor cell (the trailing spacer) is included.
        assert_eq!(line.spans[1].content.as_ref(), " ");
    }
}
