//! Signup form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::{App, ACTION_BUTTONS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the signup form with its action panel
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw one input per mounted field
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = app.focused_path().is_some();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title = if app.is_loading() {
        " Signup (loading…) "
    } else {
        " Signup "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = app
        .inputs
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, mounted) in app.inputs.iter().enumerate() {
        // Handles can disappear if an input was unmounted behind our back
        let Some(field) = app.form.controller.field(&mounted.path) else {
            continue;
        };
        let label = mounted.input.display_label(&mounted.path);
        draw_field(frame, chunks[idx], &label, field, app.focus == idx);
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focused_button = app.focused_button();
    let border_color = if focused_button.is_some() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = ACTION_BUTTONS
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, label) in ACTION_BUTTONS.iter().enumerate() {
        render_button(frame, chunks[idx], label, focused_button == Some(idx));
    }
}
