//! Search bar and recent-searches rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};

/// Renders the search input box
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let (border_color, text): (Color, String) = match app.input_mode {
        InputMode::Editing => (Color::Cyan, format!("{}\u{2588}", app.input)),
        InputMode::Normal => (
            Color::DarkGray,
            "Press / to search for a city".to_string(),
        ),
    };

    let style = match app.input_mode {
        InputMode::Editing => Style::default(),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(Span::styled(text, style)).block(block), area);
}

/// Renders the recent-searches list with the current selection highlighted
pub fn render_recent_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Recent Searches ")
        .borders(Borders::ALL);

    let recent = app.recent.list();
    if recent.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No recent searches yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = recent
        .iter()
        .enumerate()
        .map(|(index, city)| {
            let selected = index == app.recent_selected;
            let marker = if selected { "\u{25B6} " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}{}", marker, city), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
