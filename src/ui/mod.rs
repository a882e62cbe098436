//! UI rendering for the QuickLink client.
//!
//! The whole screen is derived from [`App`] state on every draw:
//! header, URL input with the submit affordance, error line, the
//! result box (shown iff a result exists), the history section (shown
//! iff history is non-empty), and key hints.

pub mod components;
mod theme;

pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_COPIED, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG, COLOR_LINK,
    COLOR_PENDING,
};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::session::CopyTarget;
use components::{link_row_line, render_input_field, InputFieldConfig, LinkRowConfig};

/// Width of the submit affordance box.
const BUTTON_WIDTH: u16 = 18;

/// Render the UI from the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let result_height = if app.session.result.is_some() { 3 } else { 0 };
    let history_height = if app.session.history.is_empty() {
        0
    } else {
        2 + 2 * app.session.history.len() as u16
    };

    let [header, input_row, error_line, result_box, history_box, _, hints] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(result_height),
            Constraint::Length(history_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_header(frame, header);
    render_input_row(frame, input_row, app);
    render_error(frame, error_line, app);
    if app.session.result.is_some() {
        render_result(frame, result_box, app);
    }
    if !app.session.history.is_empty() {
        render_history(frame, history_box, app);
    }
    render_hints(frame, hints, app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "🚀 QuickLink",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Shorten your long URLs instantly",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_input_row(frame: &mut Frame, area: Rect, app: &App) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(BUTTON_WIDTH)]).areas(area);

    let config = InputFieldConfig::new(&app.session.draft, app.cursor)
        .focused(app.focus == Focus::Input)
        .placeholder("Paste your long URL here...");
    render_input_field(frame, input_area, &config);

    // Submit affordance: label reflects the pending flag; inert while
    // pending (the key handler checks the same flag).
    let (label, color) = if app.session.pending {
        ("Shortening...", COLOR_PENDING)
    } else {
        ("Shorten", COLOR_LINK)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(button, button_area);
}

fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = &app.session.error {
        let line = Line::from(vec![
            Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error.as_str(), Style::default().fg(COLOR_ERROR)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = &app.session.result else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Your Short URL ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected = app.focus == Focus::Links && app.links_index == 0;
    let row = LinkRowConfig::new(&result.short)
        .selected(selected)
        .acknowledged(app.session.is_acknowledged(CopyTarget::Main));
    frame.render_widget(Paragraph::new(link_row_line(&row)), inner);
}

fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Recent Links ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // History row i sits at selection index i + 1 when a main result
    // row is present.
    let offset = usize::from(app.session.result.is_some());
    let mut lines = Vec::with_capacity(app.session.history.len() * 2);
    for (i, entry) in app.session.history.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.original),
            Style::default().fg(COLOR_DIM),
        )));
        let selected = app.focus == Focus::Links && app.links_index == i + offset;
        let row = LinkRowConfig::new(&entry.short)
            .selected(selected)
            .acknowledged(app.session.is_acknowledged(CopyTarget::History(i)));
        lines.push(link_row_line(&row));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Input => "Enter submit · Tab links · Ctrl+C quit",
        Focus::Links => "↑/↓ select · Enter/c copy · o open · Esc input · q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}
