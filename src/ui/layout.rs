//! Layout components (header, status bar)

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HELP_HINT: &str =
    "Tab: next | Enter: submit | Ctrl+S: submit | Ctrl+R: reset | Ctrl+L: clear field | Esc: quit";

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Hello World",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Message before hint, narrow terminals truncate from the right
    if let Some(msg) = &app.status_message {
        let color = if msg.starts_with("Error") || msg.starts_with("Failed") {
            Color::Red
        } else if msg.ends_with("need attention") {
            Color::Yellow
        } else {
            Color::Green
        };
        spans.push(Span::styled(format!(" {msg} "), Style::default().fg(color)));
        spans.push(Span::raw("|"));
    }

    spans.push(Span::styled(
        format!(" {HELP_HINT}"),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
