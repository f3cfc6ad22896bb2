//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap: an optional city
//! to look up right away, a coordinates alternative, the temperature unit,
//! and the API key flag.

use clap::Parser;
use thiserror::Error;

use crate::units::TemperatureUnit;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The unit string is not recognized
    #[error("Invalid unit: '{0}'. Valid units: c, celsius, f, fahrenheit")]
    InvalidUnit(String),

    /// The coordinates string is not LAT,LON or is out of range
    #[error("Invalid coordinates: '{0}'. Expected LAT,LON (e.g. 49.28,-123.12)")]
    InvalidCoords(String),
}

/// Skycast - current weather and forecasts for any city, in the terminal
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Terminal weather dashboard with forecasts and popular cities")]
#[command(version)]
pub struct Cli {
    /// City to look up on startup (multiple words allowed: skycast new york)
    #[arg(value_name = "CITY")]
    pub city: Vec<String>,

    /// Look up these coordinates on startup instead of a city
    ///
    /// Examples:
    ///   skycast --coords 49.28,-123.12
    #[arg(long, value_name = "LAT,LON", conflicts_with = "city")]
    pub coords: Option<String>,

    /// Temperature unit to start with: c (default) or f
    #[arg(long, value_name = "UNIT")]
    pub unit: Option<String>,

    /// OpenWeatherMap API key (falls back to OPENWEATHER_API_KEY)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// City to fetch immediately, if given
    pub initial_city: Option<String>,
    /// Coordinates to fetch immediately, if given
    pub initial_coords: Option<(f64, f64)>,
    /// Temperature unit the dashboard starts in
    pub unit: TemperatureUnit,
    /// API key from the --api-key flag, if given
    pub api_key: Option<String>,
}

/// Parses a unit string argument into a TemperatureUnit.
///
/// # Arguments
/// * `s` - The unit string from the CLI
///
/// # Returns
/// * `Ok(TemperatureUnit)` if the string matches a known unit
/// * `Err(CliError::InvalidUnit)` otherwise
pub fn parse_unit_arg(s: &str) -> Result<TemperatureUnit, CliError> {
    match s.to_ascii_lowercase().as_str() {
        "c" | "celsius" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(CliError::InvalidUnit(s.to_string())),
    }
}

/// Parses a "LAT,LON" string into a coordinate pair.
///
/// # Arguments
/// * `s` - The coordinates string from the CLI
///
/// # Returns
/// * `Ok((lat, lon))` for a well-formed, in-range pair
/// * `Err(CliError::InvalidCoords)` otherwise
pub fn parse_coords_arg(s: &str) -> Result<(f64, f64), CliError> {
    let invalid = || CliError::InvalidCoords(s.to_string());

    let (lat_str, lon_str) = s.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat_str.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon_str.trim().parse().map_err(|_| invalid())?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid());
    }

    Ok((lat, lon))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the unit or coordinates are invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let unit = match &cli.unit {
            Some(s) => parse_unit_arg(s)?,
            None => TemperatureUnit::default(),
        };

        let initial_coords = match &cli.coords {
            Some(s) => Some(parse_coords_arg(s)?),
            None => None,
        };

        let initial_city = if cli.city.is_empty() {
            None
        } else {
            Some(cli.city.join(" "))
        };

        Ok(StartupConfig {
            initial_city,
            initial_coords,
            unit,
            api_key: cli.api_key.clone(),
        })
    }
}
