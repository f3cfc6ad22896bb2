//! Skycast - current weather and forecasts for any city, in the terminal
//!
//! A terminal UI application that shows current conditions, a 24-hour
//! time-of-day summary, a 5-day forecast, and a popular-cities table,
//! with persisted recent searches.

mod app;
mod cli;
mod config;
mod data;
mod forecast;
mod store;
mod ui;
mod units;

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use cli::{Cli, StartupConfig};
use config::Config;
use data::WeatherClient;

/// Sets up a panic hook that restores the terminal before printing the panic
/// message. This ensures the terminal is usable even if the application
/// panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let startup = match StartupConfig::from_cli(&cli) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // A missing API key is reported before the TUI starts; there is nothing
    // to retry.
    let config = match Config::resolve(startup.api_key.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(startup, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the terminal UI until the user quits
async fn run(startup: StartupConfig, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance; startup lookups are already queued
    let client = WeatherClient::new(config.api_key);
    let mut app = App::new(client, &startup);

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| ui::render(f, &app))?;

        // Queued lookups run one batch at a time; the loading frame above is
        // on screen while each one is awaited.
        if let Some(action) = app.take_action() {
            app.perform(action).await;
            continue;
        }

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
