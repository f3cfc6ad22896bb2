//! Temperature units and small numeric display helpers
//!
//! All weather data is fetched in metric units; conversion to Fahrenheit
//! happens at display time only.

/// Temperature display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    /// Degrees Celsius (the unit the API returns)
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the single-letter label used next to temperatures ("C" or "F")
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    /// Returns the other unit
    pub fn toggled(&self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }
}

/// Converts a Celsius temperature to a whole degree in the requested unit
///
/// Fahrenheit is `round(c * 9/5 + 32)`; Celsius is just rounded. Rounding is
/// to the nearest whole degree, halves away from zero.
pub fn convert_temperature(celsius: f64, unit: TemperatureUnit) -> i32 {
    match unit {
        TemperatureUnit::Fahrenheit => (celsius * 9.0 / 5.0 + 32.0).round() as i32,
        TemperatureUnit::Celsius => celsius.round() as i32,
    }
}

/// Compass directions in 45-degree steps, starting at north
const WIND_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Converts a wind bearing in degrees to an 8-way compass label
pub fn wind_direction(degrees: f64) -> &'static str {
    let index = ((degrees / 45.0).round() as usize) % 8;
    WIND_DIRECTIONS[index]
}
