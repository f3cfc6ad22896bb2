//! Application state management for Skycast
//!
//! This module contains the main application state, handling keyboard input,
//! data loading, and the transitions between the search, dashboard, and
//! popular-cities panels. All mutable UI state lives in one explicit struct
//! threaded through the event loop.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::cli::StartupConfig;
use crate::data::{
    fetch_many, table_rows, CityFetchResult, CityWeatherRow, CurrentConditions, ForecastEntry,
    ForecastResponse, WeatherClient, WeatherError, POPULAR_CITIES, TABLE_CITY_COUNT,
};
use crate::store::{FileStore, KeyValueStore, MemoryStore, RecentSearches};
use crate::units::TemperatureUnit;

/// Whether keystrokes navigate the dashboard or edit the search input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate and trigger actions
    Normal,
    /// Keys type into the search input
    Editing,
}

/// Deferred work the event loop performs between renders
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Look up a city by name (current conditions + forecast)
    SearchCity(String),
    /// Look up a location by coordinates
    FetchCoords(f64, f64),
    /// Reload the popular-cities table
    RefreshTable,
}

/// Main application struct managing state and data
pub struct App {
    /// Temperature unit used for every displayed temperature
    pub unit: TemperatureUnit,
    /// Search input buffer
    pub input: String,
    /// Current keyboard mode
    pub input_mode: InputMode,
    /// Current conditions for the searched location, if any
    pub current: Option<CurrentConditions>,
    /// Forecast series for the searched location; empty means none loaded
    pub forecast: Vec<ForecastEntry>,
    /// Rows of the popular-cities table
    pub table: Vec<CityWeatherRow>,
    /// Single error slot; a newer error replaces the previous one
    pub error: Option<String>,
    /// When the displayed weather was last refreshed
    pub last_updated: Option<DateTime<Local>>,
    /// Recently searched cities
    pub recent: RecentSearches<Box<dyn KeyValueStore>>,
    /// Selected index in the recent-searches list
    pub recent_selected: usize,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Whether a city/coords lookup is in flight
    pub loading: bool,
    /// Whether the popular-cities table is reloading
    pub table_loading: bool,
    /// Queued actions, performed by the event loop in order
    pending: VecDeque<Action>,
    /// Weather API client
    client: WeatherClient,
}

impl App {
    /// Creates a new App with the platform store and the given startup
    /// configuration
    pub fn new(client: WeatherClient, config: &StartupConfig) -> Self {
        let store: Box<dyn KeyValueStore> = match FileStore::new() {
            Some(file_store) => Box::new(file_store),
            None => Box::new(MemoryStore::new()),
        };
        Self::with_store(client, config, store)
    }

    /// Creates a new App backed by a specific key-value store
    pub fn with_store(
        client: WeatherClient,
        config: &StartupConfig,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let mut app = Self {
            unit: config.unit,
            input: String::new(),
            input_mode: InputMode::Normal,
            current: None,
            forecast: Vec::new(),
            table: Vec::new(),
            error: None,
            last_updated: None,
            recent: RecentSearches::load(store),
            recent_selected: 0,
            should_quit: false,
            show_help: false,
            loading: false,
            table_loading: false,
            pending: VecDeque::new(),
            client,
        };

        // The popular-cities table loads on every startup; an initial city
        // or coordinates lookup is queued behind it when requested.
        app.enqueue(Action::RefreshTable);
        if let Some((lat, lon)) = config.initial_coords {
            app.enqueue(Action::FetchCoords(lat, lon));
        } else if let Some(city) = &config.initial_city {
            app.enqueue(Action::SearchCity(city.clone()));
        }

        app
    }

    /// Takes the next queued action, if any
    pub fn take_action(&mut self) -> Option<Action> {
        self.pending.pop_front()
    }

    /// Queues an action and raises the matching loading flag so the next
    /// render shows progress
    fn enqueue(&mut self, action: Action) {
        match action {
            Action::RefreshTable => self.table_loading = true,
            Action::SearchCity(_) | Action::FetchCoords(_, _) => self.loading = true,
        }
        self.pending.push_back(action);
    }

    /// Performs a queued action
    pub async fn perform(&mut self, action: Action) {
        match action {
            Action::SearchCity(city) => self.search_city(&city).await,
            Action::FetchCoords(lat, lon) => self.fetch_by_coords(lat, lon).await,
            Action::RefreshTable => self.refresh_table().await,
        }
    }

    /// Looks up a city by name: current conditions and forecast together
    pub async fn search_city(&mut self, city: &str) {
        self.loading = true;
        self.error = None;
        let (current, forecast) = tokio::join!(
            self.client.current_by_city(city),
            self.client.forecast_by_city(city)
        );
        self.loading = false;
        self.apply_city_results(city, current, forecast);
    }

    /// Looks up a location by coordinates
    pub async fn fetch_by_coords(&mut self, lat: f64, lon: f64) {
        self.loading = true;
        self.error = None;
        let (current, forecast) = tokio::join!(
            self.client.current_by_coords(lat, lon),
            self.client.forecast_by_coords(lat, lon)
        );
        self.loading = false;
        self.apply_coords_results(current, forecast);
    }

    /// Reloads the popular-cities table
    pub async fn refresh_table(&mut self) {
        self.table_loading = true;
        let cities = &POPULAR_CITIES[..TABLE_CITY_COUNT];
        let results = fetch_many(&self.client, cities).await;
        self.table_loading = false;
        self.apply_table_results(&results);
    }

    /// Applies the outcome of a by-name lookup
    ///
    /// On success the snapshot and forecast replace the displayed data and
    /// the city is recorded in recent searches. On failure the displayed
    /// weather is cleared and the error slot is set.
    fn apply_city_results(
        &mut self,
        city: &str,
        current: Result<CurrentConditions, WeatherError>,
        forecast: Result<ForecastResponse, WeatherError>,
    ) {
        match (current, forecast) {
            (Ok(current), Ok(forecast)) => {
                self.current = Some(current);
                self.forecast = forecast.list;
                self.error = None;
                self.last_updated = Some(Local::now());
                self.recent.add(city);
                self.clamp_recent_selection();
            }
            (Err(e), _) | (_, Err(e)) => {
                self.error = Some(e.to_string());
                self.current = None;
                self.forecast.clear();
            }
        }
    }

    /// Applies the outcome of a by-coordinates lookup
    ///
    /// Unlike the by-name path, a failure leaves any previously displayed
    /// weather in place; only the error slot changes.
    fn apply_coords_results(
        &mut self,
        current: Result<CurrentConditions, WeatherError>,
        forecast: Result<ForecastResponse, WeatherError>,
    ) {
        match (current, forecast) {
            (Ok(current), Ok(forecast)) => {
                self.current = Some(current);
                self.forecast = forecast.list;
                self.error = None;
                self.last_updated = Some(Local::now());
            }
            (Err(e), _) | (_, Err(e)) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Applies multi-city results to the table
    ///
    /// Only successful cities become rows; failed cities are dropped without
    /// touching the error slot or previously displayed weather.
    fn apply_table_results(&mut self, results: &[CityFetchResult]) {
        self.table = table_rows(results);
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings (normal mode)
    /// - `q`: Quit
    /// - `Esc`: Dismiss the error message, or quit when none is shown
    /// - `/`: Start typing a city name
    /// - `u`: Toggle Celsius/Fahrenheit
    /// - `r`: Refresh the popular-cities table
    /// - `1`-`5`: Look up the corresponding popular-cities row
    /// - `Up`/`k`, `Down`/`j`: Move the recent-searches selection
    /// - `Enter`: Look up the selected recent search
    /// - `x`: Remove the selected recent search
    /// - `c`: Clear all recent searches
    /// - `?`: Toggle the help overlay
    ///
    /// # Key Bindings (editing mode)
    /// - `Enter`: Submit the typed city
    /// - `Esc`: Cancel editing
    /// - `Backspace`: Delete the last character
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key_event),
            InputMode::Normal => self.handle_normal_key(key_event),
        }
    }

    /// Handles a key press while typing a city name
    fn handle_editing_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Enter => {
                let city = self.input.trim().to_string();
                self.input.clear();
                self.input_mode = InputMode::Normal;
                if !city.is_empty() {
                    self.enqueue(Action::SearchCity(city));
                }
            }
            KeyCode::Esc => {
                self.input.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Handles a key press in normal mode
    fn handle_normal_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.error.is_some() {
                    self.error = None;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('u') => {
                self.unit = self.unit.toggled();
            }
            KeyCode::Char('r') => {
                self.enqueue(Action::RefreshTable);
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_recent_selection_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_recent_selection_down();
            }
            KeyCode::Enter => {
                if let Some(city) = self.recent.list().get(self.recent_selected) {
                    self.enqueue(Action::SearchCity(city.clone()));
                }
            }
            KeyCode::Char('x') => {
                if let Some(city) = self.recent.list().get(self.recent_selected).cloned() {
                    self.recent.remove(&city);
                    self.clamp_recent_selection();
                }
            }
            KeyCode::Char('c') => {
                self.recent.clear();
                self.recent_selected = 0;
            }
            // Popular-cities rows (1-5)
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(row) = self.table.get(index) {
                    self.enqueue(Action::SearchCity(row.city.clone()));
                }
            }
            _ => {}
        }
    }

    /// Moves the recent-searches selection up, wrapping to the bottom
    fn move_recent_selection_up(&mut self) {
        let count = self.recent.list().len();
        if count == 0 {
            return;
        }
        if self.recent_selected == 0 {
            self.recent_selected = count - 1;
        } else {
            self.recent_selected -= 1;
        }
    }

    /// Moves the recent-searches selection down, wrapping to the top
    fn move_recent_selection_down(&mut self) {
        let count = self.recent.list().len();
        if count == 0 {
            return;
        }
        self.recent_selected = (self.recent_selected + 1) % count;
    }

    /// Keeps the recent-searches selection inside the list after mutation
    fn clamp_recent_selection(&mut self) {
        let count = self.recent.list().len();
        if count == 0 {
            self.recent_selected = 0;
        } else if self.recent_selected >= count {
            self.recent_selected = count - 1;
        }
    }
}
