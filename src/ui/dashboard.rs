//! Weather dashboard rendering: current conditions, time-of-day summary,
//! hourly strip, and the 5-day forecast
//!
//! All aggregation happens in [`crate::forecast`]; this module only lays the
//! results out.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::CurrentConditions;
use crate::forecast::{daily_representatives, hourly_strip, period_summaries};
use crate::units::{convert_temperature, wind_direction, TemperatureUnit};

/// Maps a condition group to a weather glyph
fn condition_glyph(condition: &str) -> &'static str {
    match condition {
        "Clear" => "\u{2600}",                      // ☀
        "Clouds" => "\u{2601}",                     // ☁
        "Rain" | "Drizzle" => "\u{1F327}",          // 🌧
        "Thunderstorm" => "\u{26C8}",               // ⛈
        "Snow" => "\u{2744}",                       // ❄
        "Mist" | "Fog" | "Haze" => "\u{1F32B}",     // 🌫
        _ => "\u{26C5}",                            // ⛅
    }
}

/// Maps an OpenWeatherMap icon code to a glyph
///
/// The leading two digits identify the condition; the day/night suffix only
/// matters for clear skies.
fn icon_glyph(icon: &str) -> &'static str {
    if icon.starts_with("01") {
        return if icon.ends_with('n') {
            "\u{1F319}" // 🌙
        } else {
            "\u{2600}" // ☀
        };
    }
    match icon.get(..2).unwrap_or("") {
        "02" => "\u{26C5}",        // ⛅
        "03" | "04" => "\u{2601}", // ☁
        "09" | "10" => "\u{1F327}", // 🌧
        "11" => "\u{26C8}",        // ⛈
        "13" => "\u{2744}",        // ❄
        "50" => "\u{1F32B}",       // 🌫
        _ => "\u{26C5}",           // ⛅
    }
}

/// Color for temperature (warmer = more red, cooler = more blue)
fn temperature_color(temp_celsius: f64) -> Color {
    if temp_celsius >= 30.0 {
        Color::Red
    } else if temp_celsius >= 25.0 {
        Color::LightRed
    } else if temp_celsius >= 20.0 {
        Color::Yellow
    } else if temp_celsius >= 15.0 {
        Color::Green
    } else if temp_celsius >= 10.0 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

/// Formats a Celsius temperature in the app's display unit
fn temp_span(celsius: f64, unit: TemperatureUnit) -> Span<'static> {
    Span::styled(
        format!("{}°{}", convert_temperature(celsius, unit), unit.label()),
        Style::default()
            .fg(temperature_color(celsius))
            .add_modifier(Modifier::BOLD),
    )
}

/// Renders the dashboard column
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // current conditions
            Constraint::Length(7), // time-of-day summary
            Constraint::Length(4), // hourly strip
            Constraint::Min(6),    // 5-day forecast
        ])
        .split(area);

    render_current(frame, app, chunks[0]);
    render_periods(frame, app, chunks[1]);
    render_hourly(frame, app, chunks[2]);
    render_daily(frame, app, chunks[3]);
}

/// Renders the current-conditions card, or the empty-state prompt
fn render_current(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Weather ")
        .borders(Borders::ALL);

    let Some(current) = &app.current else {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Search for a city (press /) or pick one below",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let paragraph = Paragraph::new(current_lines(current, app.unit)).block(block);
    frame.render_widget(paragraph, area);
}

/// Builds the text lines of the current-conditions card
fn current_lines(current: &CurrentConditions, unit: TemperatureUnit) -> Vec<Line<'static>> {
    let mut title = current.name.clone();
    if let Some(country) = &current.sys.country {
        title.push_str(&format!(", {}", country));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::raw(condition_glyph(current.condition_main()).to_string()),
            Span::raw(format!(" {}", current.condition_description())),
        ]),
        Line::from(vec![
            temp_span(current.main.temp, unit),
            Span::styled(
                format!(
                    "  feels like {}°{}",
                    convert_temperature(current.main.feels_like, unit),
                    unit.label()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!(
            "H: {}°  L: {}°   Humidity: {}%   Pressure: {} hPa",
            convert_temperature(current.main.temp_max, unit),
            convert_temperature(current.main.temp_min, unit),
            current.main.humidity,
            current.main.pressure
        )),
    ];

    let mut wind = format!("Wind: {:.1} m/s", current.wind.speed);
    if let Some(deg) = current.wind.deg {
        wind.push_str(&format!(" {}", wind_direction(deg)));
    }
    if let Some(visibility) = current.visibility {
        wind.push_str(&format!("   Visibility: {:.1} km", visibility as f64 / 1000.0));
    }
    wind.push_str(&format!("   Clouds: {}%", current.clouds.all));
    lines.push(Line::from(wind));

    if let (Some(sunrise), Some(sunset)) = (current.sys.sunrise, current.sys.sunset) {
        lines.push(Line::from(format!(
            "Sunrise: {}   Sunset: {}",
            format_clock(sunrise),
            format_clock(sunset)
        )));
    }

    lines
}

/// Formats an epoch timestamp as a local HH:MM clock time
fn format_clock(timestamp: i64) -> String {
    match chrono::DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Renders the time-of-day summary cards
fn render_periods(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Next 24 Hours ").borders(Borders::ALL);

    let summaries = period_summaries(&app.forecast, &Local);
    if summaries.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, summaries.len() as u32);
            summaries.len()
        ])
        .split(inner);

    for (summary, column) in summaries.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                summary.period.label(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw(condition_glyph(summary.representative.condition_main()).to_string()),
                Span::raw(" "),
                temp_span(summary.average_temp, app.unit),
            ]),
            Line::from(summary.representative.condition_description().to_string()),
            Line::from(Span::styled(
                format!("Rain: {}%", summary.precipitation_pct),
                Style::default().fg(Color::Cyan),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
            *column,
        );
    }
}

/// Renders the raw hourly strip (first samples, "Now" first)
fn render_hourly(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Hourly ").borders(Borders::ALL);

    let strip = hourly_strip(&app.forecast);
    if strip.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let mut time_spans: Vec<Span> = Vec::new();
    let mut temp_spans: Vec<Span> = Vec::new();

    for slot in &strip {
        let label = if slot.is_current {
            "Now".to_string()
        } else {
            match chrono::DateTime::from_timestamp(slot.entry.dt, 0) {
                Some(dt) => dt.with_timezone(&Local).format("%H:%M").to_string(),
                None => "--:--".to_string(),
            }
        };
        let style = if slot.is_current {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        time_spans.push(Span::styled(format!("{:<8}", label), style));
        temp_spans.push(Span::styled(
            format!(
                "{:<8}",
                format!(
                    "{} {}°{}",
                    icon_glyph(slot.entry.icon_code()),
                    convert_temperature(slot.entry.main.temp, app.unit),
                    app.unit.label()
                )
            ),
            Style::default().fg(temperature_color(slot.entry.main.temp)),
        ));
    }

    let paragraph =
        Paragraph::new(vec![Line::from(time_spans), Line::from(temp_spans)]).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the 5-day forecast, one representative sample per day
fn render_daily(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" 5-Day Forecast ").borders(Borders::ALL);

    let daily = daily_representatives(&app.forecast, &Local);
    if daily.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let mut lines = Vec::new();
    for entry in &daily {
        let day = match chrono::DateTime::from_timestamp(entry.dt, 0) {
            Some(dt) => dt.with_timezone(&Local).format("%a, %b %e").to_string(),
            None => "-".to_string(),
        };
        let rain = format!("{}%", ((entry.pop.unwrap_or(0.0)) * 100.0).round() as i32);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", day), Style::default().fg(Color::White)),
            Span::raw(format!("{} ", condition_glyph(entry.condition_main()))),
            temp_span(entry.main.temp, app.unit),
            Span::raw(format!(
                "  H: {}°  L: {}°  ",
                convert_temperature(entry.main.temp_max, app.unit),
                convert_temperature(entry.main.temp_min, app.unit)
            )),
            Span::styled(
                format!("{:<18}", entry.condition_description()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("Rain: {}", rain), Style::default().fg(Color::Cyan)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
