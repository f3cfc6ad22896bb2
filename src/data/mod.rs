//! Core data models for Skycast
//!
//! This module contains the data types exchanged with the OpenWeatherMap API
//! and the derived types displayed by the dashboard. The API payloads are
//! kept in their upstream shape and consumed read-only.

pub mod cities;
pub mod weather;

pub use cities::{fetch_many, table_rows, CityFetchResult, POPULAR_CITIES, TABLE_CITY_COUNT};
pub use weather::{WeatherClient, WeatherError};

use serde::{Deserialize, Serialize};

/// Geographic coordinates of a weather observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coord {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

/// One weather condition entry (OpenWeatherMap sends a list, usually of one)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSummary {
    /// Condition group, e.g. "Clear", "Rain", "Clouds"
    pub main: String,
    /// Longer description, e.g. "light rain"
    pub description: String,
    /// Icon code, e.g. "10d"
    pub icon: String,
}

/// Primary temperature and atmosphere readings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainMetrics {
    /// Temperature in Celsius
    pub temp: f64,
    /// Perceived temperature in Celsius
    #[serde(default)]
    pub feels_like: f64,
    /// Minimum observed/forecast temperature in Celsius
    pub temp_min: f64,
    /// Maximum observed/forecast temperature in Celsius
    pub temp_max: f64,
    /// Atmospheric pressure in hPa
    #[serde(default)]
    pub pressure: i32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
}

/// Wind readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in meters per second
    pub speed: f64,
    /// Wind bearing in degrees, when reported
    #[serde(default)]
    pub deg: Option<f64>,
}

/// Cloud cover
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Clouds {
    /// Cloudiness percentage (0-100)
    pub all: u8,
}

/// Country and sun times for a current-conditions response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SysInfo {
    /// ISO country code, when reported
    #[serde(default)]
    pub country: Option<String>,
    /// Sunrise as UTC epoch seconds
    #[serde(default)]
    pub sunrise: Option<i64>,
    /// Sunset as UTC epoch seconds
    #[serde(default)]
    pub sunset: Option<i64>,
}

/// Current weather snapshot for one location
///
/// Mirrors the OpenWeatherMap `/weather` response (metric units).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location coordinates
    pub coord: Coord,
    /// Condition list; the first entry is the headline condition
    pub weather: Vec<ConditionSummary>,
    /// Temperature and atmosphere readings
    pub main: MainMetrics,
    /// Visibility in meters, when reported
    #[serde(default)]
    pub visibility: Option<u32>,
    /// Wind readings
    pub wind: Wind,
    /// Cloud cover
    #[serde(default)]
    pub clouds: Clouds,
    /// Observation time as UTC epoch seconds
    pub dt: i64,
    /// Country and sun times
    #[serde(default)]
    pub sys: SysInfo,
    /// Resolved city display name
    pub name: String,
}

impl CurrentConditions {
    /// Headline condition group, or "Unknown" when the list is empty
    pub fn condition_main(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.main.as_str())
            .unwrap_or("Unknown")
    }

    /// Headline condition description, or empty when the list is empty
    pub fn condition_description(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.description.as_str())
            .unwrap_or("")
    }
}

/// One 3-hour forecast sample
///
/// Mirrors an entry of the OpenWeatherMap `/forecast` list. Samples arrive
/// chronologically at a nominal 3-hour spacing; the aggregation code in
/// [`crate::forecast`] tolerates irregular spacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast time as UTC epoch seconds
    pub dt: i64,
    /// Temperature and atmosphere readings
    pub main: MainMetrics,
    /// Condition list; the first entry is the headline condition
    pub weather: Vec<ConditionSummary>,
    /// Wind readings
    pub wind: Wind,
    /// Precipitation probability in 0.0..=1.0, when reported
    #[serde(default)]
    pub pop: Option<f64>,
}

impl ForecastEntry {
    /// Headline condition group, or "Unknown" when the list is empty
    pub fn condition_main(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.main.as_str())
            .unwrap_or("Unknown")
    }

    /// Headline condition description, or empty when the list is empty
    pub fn condition_description(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.description.as_str())
            .unwrap_or("")
    }

    /// Headline icon code, or the clear-day icon when the list is empty
    pub fn icon_code(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.icon.as_str())
            .unwrap_or("01d")
    }
}

/// City metadata attached to a forecast response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastCity {
    /// Resolved city display name
    pub name: String,
    /// ISO country code, when reported
    #[serde(default)]
    pub country: Option<String>,
}

/// 5-day/3-hour forecast for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Chronological forecast samples
    pub list: Vec<ForecastEntry>,
    /// City metadata
    pub city: ForecastCity,
}

/// One row of the popular-cities table
///
/// Derived 1:1 from a successful per-city fetch; cities whose fetch failed
/// have no row.
#[derive(Debug, Clone, PartialEq)]
pub struct CityWeatherRow {
    /// City name as requested
    pub city: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Headline condition group
    pub condition: String,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in meters per second
    pub wind_speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trimmed-down but shape-accurate OpenWeatherMap /weather payload
    const CURRENT_RESPONSE: &str = r#"{
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [
            { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }
        ],
        "base": "stations",
        "main": {
            "temp": 18.3,
            "feels_like": 18.1,
            "temp_min": 16.9,
            "temp_max": 19.6,
            "pressure": 1012,
            "humidity": 72
        },
        "visibility": 10000,
        "wind": { "speed": 4.1, "deg": 240 },
        "clouds": { "all": 75 },
        "dt": 1721050000,
        "sys": { "country": "GB", "sunrise": 1721012345, "sunset": 1721070000 },
        "timezone": 3600,
        "id": 2643743,
        "name": "London",
        "cod": 200
    }"#;

    /// Trimmed-down /forecast payload with two samples
    const FORECAST_RESPONSE: &str = r#"{
        "cod": "200",
        "message": 0,
        "cnt": 2,
        "list": [
            {
                "dt": 1721050800,
                "main": {
                    "temp": 19.0, "feels_like": 18.8, "temp_min": 18.0,
                    "temp_max": 19.5, "pressure": 1011, "humidity": 70
                },
                "weather": [
                    { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
                ],
                "wind": { "speed": 3.5, "deg": 230 },
                "pop": 0.4,
                "dt_txt": "2024-07-15 15:00:00"
            },
            {
                "dt": 1721061600,
                "main": {
                    "temp": 17.2, "feels_like": 17.0, "temp_min": 16.5,
                    "temp_max": 17.2, "pressure": 1012, "humidity": 78
                },
                "weather": [
                    { "id": 801, "main": "Clouds", "description": "few clouds", "icon": "02n" }
                ],
                "wind": { "speed": 2.8, "deg": 210 },
                "dt_txt": "2024-07-15 18:00:00"
            }
        ],
        "city": { "id": 2643743, "name": "London", "country": "GB" }
    }"#;

    #[test]
    fn test_parse_current_conditions() {
        let current: CurrentConditions =
            serde_json::from_str(CURRENT_RESPONSE).expect("Failed to parse current conditions");

        assert_eq!(current.name, "London");
        assert!((current.main.temp - 18.3).abs() < 0.01);
        assert!((current.main.feels_like - 18.1).abs() < 0.01);
        assert_eq!(current.main.humidity, 72);
        assert_eq!(current.main.pressure, 1012);
        assert!((current.wind.speed - 4.1).abs() < 0.01);
        assert_eq!(current.wind.deg, Some(240.0));
        assert_eq!(current.clouds.all, 75);
        assert_eq!(current.visibility, Some(10000));
        assert_eq!(current.sys.country.as_deref(), Some("GB"));
        assert_eq!(current.sys.sunrise, Some(1721012345));
        assert_eq!(current.condition_main(), "Clouds");
        assert_eq!(current.condition_description(), "broken clouds");
    }

    #[test]
    fn test_parse_forecast_response() {
        let forecast: ForecastResponse =
            serde_json::from_str(FORECAST_RESPONSE).expect("Failed to parse forecast");

        assert_eq!(forecast.list.len(), 2);
        assert_eq!(forecast.city.name, "London");
        assert_eq!(forecast.city.country.as_deref(), Some("GB"));

        let first = &forecast.list[0];
        assert_eq!(first.dt, 1721050800);
        assert!((first.main.temp - 19.0).abs() < 0.01);
        assert_eq!(first.pop, Some(0.4));
        assert_eq!(first.condition_main(), "Rain");
        assert_eq!(first.icon_code(), "10d");

        // Second sample omits pop entirely
        assert_eq!(forecast.list[1].pop, None);
    }

    #[test]
    fn test_condition_helpers_fall_back_on_empty_list() {
        let entry = ForecastEntry {
            dt: 0,
            main: MainMetrics {
                temp: 10.0,
                feels_like: 10.0,
                temp_min: 10.0,
                temp_max: 10.0,
                pressure: 1013,
                humidity: 50,
            },
            weather: Vec::new(),
            wind: Wind {
                speed: 1.0,
                deg: None,
            },
            pop: None,
        };

        assert_eq!(entry.condition_main(), "Unknown");
        assert_eq!(entry.condition_description(), "");
        assert_eq!(entry.icon_code(), "01d");
    }

    #[test]
    fn test_current_conditions_tolerates_missing_optional_fields() {
        // Minimal payload: no visibility, no sys, no clouds
        let minimal = r#"{
            "coord": { "lon": 0.0, "lat": 0.0 },
            "weather": [],
            "main": {
                "temp": 25.0, "temp_min": 24.0, "temp_max": 26.0, "humidity": 60
            },
            "wind": { "speed": 0.5 },
            "dt": 1721050000,
            "name": "Null Island"
        }"#;

        let current: CurrentConditions =
            serde_json::from_str(minimal).expect("Failed to parse minimal payload");

        assert_eq!(current.visibility, None);
        assert_eq!(current.sys.country, None);
        assert_eq!(current.wind.deg, None);
        assert_eq!(current.clouds.all, 0);
        assert_eq!(current.condition_main(), "Unknown");
        assert!((current.main.feels_like - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_forecast_entry_serialization_roundtrip() {
        let forecast: ForecastResponse =
            serde_json::from_str(FORECAST_RESPONSE).expect("Failed to parse forecast");
        let entry = forecast.list[0].clone();

        let json = serde_json::to_string(&entry).expect("Failed to serialize ForecastEntry");
        let back: ForecastEntry =
            serde_json::from_str(&json).expect("Failed to deserialize ForecastEntry");

        assert_eq!(back.dt, entry.dt);
        assert!((back.main.temp - entry.main.temp).abs() < 0.01);
        assert_eq!(back.pop, entry.pop);
        assert_eq!(back.condition_main(), entry.condition_main());
    }
}
