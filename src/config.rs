//! API credential resolution
//!
//! The OpenWeatherMap key comes from the `--api-key` flag or, failing that,
//! the `OPENWEATHER_API_KEY` environment variable. A missing key is a
//! configuration error reported before the dashboard starts; there is
//! nothing to retry.

use thiserror::Error;

/// Environment variable consulted when no `--api-key` flag is given
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Errors in the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key was provided by flag or environment
    #[error("API key is not configured. Pass --api-key or set {API_KEY_ENV}")]
    MissingApiKey,
}

/// Resolved startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap API key
    pub api_key: String,
}

impl Config {
    /// Resolves the configuration from the CLI flag and the process
    /// environment
    pub fn resolve(api_key_flag: Option<String>) -> Result<Self, ConfigError> {
        Self::from_sources(api_key_flag, std::env::var(API_KEY_ENV).ok())
    }

    /// Resolves the configuration from explicit sources, flag first
    ///
    /// Blank values are treated as absent.
    pub fn from_sources(
        flag: Option<String>,
        env: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = flag
            .into_iter()
            .chain(env)
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self { api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_provides_key() {
        let config = Config::from_sources(Some("flag-key".to_string()), None).unwrap();
        assert_eq!(config.api_key, "flag-key");
    }

    #[test]
    fn test_environment_provides_key() {
        let config = Config::from_sources(None, Some("env-key".to_string())).unwrap();
        assert_eq!(config.api_key, "env-key");
    }

    #[test]
    fn test_flag_takes_precedence_over_environment() {
        let config =
            Config::from_sources(Some("flag-key".to_string()), Some("env-key".to_string()))
                .unwrap();
        assert_eq!(config.api_key, "flag-key");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let result = Config::from_sources(None, None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let result = Config::from_sources(Some("   ".to_string()), Some(String::new()));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_blank_flag_falls_back_to_environment() {
        let config =
            Config::from_sources(Some(String::new()), Some("env-key".to_string())).unwrap();
        assert_eq!(config.api_key, "env-key");
    }

    #[test]
    fn test_key_is_trimmed() {
        let config = Config::from_sources(Some("  key  ".to_string()), None).unwrap();
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn test_error_message_names_the_env_var() {
        let err = Config::from_sources(None, None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }
}
