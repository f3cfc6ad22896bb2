//! Popular-cities table rendering
//!
//! Shows current weather for the first few popular cities. Cities whose
//! lookup failed simply have no row; the table never shows per-row errors.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::units::convert_temperature;

/// Renders the popular-cities table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.table_loading {
        " Popular Cities (loading...) "
    } else {
        " Popular Cities "
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if app.table.is_empty() {
        let note = if app.table_loading {
            "Loading city weather..."
        } else {
            "No city weather available. Press r to refresh."
        };
        let empty = Paragraph::new(Span::styled(note, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["#", "City", "Temp", "Conditions", "Hum", "Wind"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.table.iter().enumerate().map(|(index, row)| {
        Row::new(vec![
            Cell::from(format!("{}", index + 1)),
            Cell::from(row.city.clone()),
            Cell::from(format!(
                "{}°{}",
                convert_temperature(row.temperature, app.unit),
                app.unit.label()
            )),
            Cell::from(row.condition.clone()),
            Cell::from(format!("{}%", row.humidity)),
            Cell::from(format!("{:.1} m/s", row.wind_speed)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
