//! Popular cities and the multi-city fetch orchestrator
//!
//! The dashboard's table shows current weather for a handful of well-known
//! cities. All lookups are issued concurrently; a failing city never takes
//! its siblings down with it.

use futures::future::join_all;

use super::{CityWeatherRow, CurrentConditions, WeatherClient, WeatherError};

/// Well-known cities offered by the dashboard
pub const POPULAR_CITIES: [&str; 25] = [
    "London",
    "New York",
    "Tokyo",
    "Paris",
    "Sydney",
    "Mumbai",
    "Dubai",
    "Singapore",
    "Berlin",
    "Rome",
    "Madrid",
    "Barcelona",
    "Amsterdam",
    "Vienna",
    "Prague",
    "Bangkok",
    "Hong Kong",
    "Seoul",
    "Toronto",
    "Los Angeles",
    "Chicago",
    "Miami",
    "San Francisco",
    "Boston",
    "Seattle",
];

/// How many popular cities the table actually fetches and shows
pub const TABLE_CITY_COUNT: usize = 5;

/// Outcome of one city's lookup, success or failure
#[derive(Debug)]
pub struct CityFetchResult {
    /// City name as requested
    pub city: String,
    /// The lookup outcome; failures carry the error untouched
    pub result: Result<CurrentConditions, WeatherError>,
}

/// Fetches current weather for every given city concurrently
///
/// One lookup is launched per city, all at once, and the call waits for
/// every lookup to settle. Each failure is captured in that city's
/// [`CityFetchResult`]; it neither cancels nor fails the sibling lookups,
/// and the aggregate call itself never fails.
///
/// The returned vector has exactly one entry per requested city, in request
/// order.
pub async fn fetch_many(client: &WeatherClient, cities: &[&str]) -> Vec<CityFetchResult> {
    let lookups = cities.iter().map(|&city| async move {
        CityFetchResult {
            city: city.to_string(),
            result: client.current_by_city(city).await,
        }
    });

    join_all(lookups).await
}

/// Projects successful fetch results into table rows
///
/// Failed cities are dropped from the table; the surviving rows keep the
/// request order.
pub fn table_rows(results: &[CityFetchResult]) -> Vec<CityWeatherRow> {
    results
        .iter()
        .filter_map(|item| {
            let data = item.result.as_ref().ok()?;
            Some(CityWeatherRow {
                city: item.city.clone(),
                temperature: data.main.temp,
                condition: data.condition_main().to_string(),
                humidity: data.main.humidity,
                wind_speed: data.wind.speed,
            })
        })
        .collect()
}
