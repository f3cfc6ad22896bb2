//! OpenWeatherMap API client
//!
//! This module fetches current conditions and the 5-day/3-hour forecast from
//! OpenWeatherMap, by city name or by coordinates, always in metric units.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{CurrentConditions, ForecastResponse};

/// Base URL for the OpenWeatherMap API
const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Fallback message when an error response carries no usable body
const DEFAULT_ERROR_MESSAGE: &str = "Failed to fetch weather data";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP request itself failed (connection, TLS, decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{message} (status {code})")]
    Api {
        /// Human-readable message from the API error body
        message: String,
        /// HTTP status code of the response
        code: u16,
    },
}

/// Error body shape OpenWeatherMap returns alongside non-success statuses
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the OpenWeatherMap current-weather and forecast endpoints
#[derive(Debug, Clone)]
pub struct WeatherClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API credential appended to every request
    api_key: String,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl WeatherClient {
    /// Creates a new WeatherClient with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Creates a new WeatherClient with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetches current conditions for a city by name
    ///
    /// # Arguments
    /// * `city` - City name as entered by the user
    ///
    /// # Returns
    /// * `Ok(CurrentConditions)` - Parsed current-weather snapshot
    /// * `Err(WeatherError)` - If the request or the API fails
    pub async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetches current conditions by coordinates
    pub async fn current_by_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetches the 5-day/3-hour forecast for a city by name
    pub async fn forecast_by_city(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetches the 5-day/3-hour forecast by coordinates
    pub async fn forecast_by_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Turns an HTTP response into a parsed payload or a WeatherError
    ///
    /// Non-success statuses become `WeatherError::Api`, reading the message
    /// from the error body when one is present.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(response.json::<T>().await?)
    }
}

/// Builds a WeatherError::Api from a status code and raw error body
///
/// Malformed bodies are tolerated: the message falls back to a default.
fn api_error(code: u16, body: &str) -> WeatherError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    WeatherError::Api {
        message: parsed
            .message
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        code,
    }
}
