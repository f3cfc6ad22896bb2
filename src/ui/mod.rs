//! UI rendering module for Skycast
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod cities;
pub mod dashboard;
pub mod help_overlay;
pub mod search;

pub use help_overlay::render as render_help_overlay;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};

/// Renders the whole dashboard frame
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // search bar
            Constraint::Length(1), // error / status line
            Constraint::Min(10),   // body
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    search::render_input(frame, app, chunks[1]);
    render_status_line(frame, app, chunks[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[3]);

    dashboard::render(frame, app, body[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(7)])
        .split(body[1]);

    search::render_recent_list(frame, app, side[0]);
    cities::render(frame, app, side[1]);

    render_key_hints(frame, app, chunks[4]);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders the title line with the unit and last-updated stamp
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " Skycast ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("°{} ", app.unit.label()),
            Style::default().fg(Color::Yellow),
        ),
    ];

    if let Some(updated) = app.last_updated {
        spans.push(Span::styled(
            format!("last updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the error slot, or a loading note when a lookup is in flight
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(error) = &app.error {
        Line::from(Span::styled(
            format!(" {} (Esc to dismiss)", error),
            Style::default().fg(Color::Red),
        ))
    } else if app.loading {
        Line::from(Span::styled(
            " Fetching weather...",
            Style::default().fg(Color::Cyan),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the bottom key-hint line
fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Editing => " Enter search  Esc cancel",
        InputMode::Normal => " / search  u units  r refresh  1-5 cities  ? help  q quit",
    };

    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        area,
    );
}
