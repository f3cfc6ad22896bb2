//! Integration tests for CLI argument handling
//!
//! Tests the city/coords/unit arguments and API-key resolution from the
//! command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skycast"))
        .args(args)
        .env_remove("OPENWEATHER_API_KEY")
        .output()
        .expect("Failed to execute skycast")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skycast"), "Help should mention skycast");
    assert!(stdout.contains("coords"), "Help should mention --coords");
    assert!(stdout.contains("unit"), "Help should mention --unit");
}

#[test]
fn test_missing_api_key_prints_error_and_exits() {
    let output = run_cli(&["London"]);
    assert!(
        !output.status.success(),
        "Expected a missing API key to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("OPENWEATHER_API_KEY"),
        "Should name the environment variable: {}",
        stderr
    );
}

#[test]
fn test_invalid_unit_prints_error_and_exits() {
    let output = run_cli(&["--unit", "kelvin"]);
    assert!(!output.status.success(), "Expected invalid unit to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid unit") || stderr.contains("kelvin"),
        "Should print error message about the invalid unit: {}",
        stderr
    );
}

#[test]
fn test_invalid_coords_prints_error_and_exits() {
    let output = run_cli(&["--coords", "not-coords"]);
    assert!(!output.status.success(), "Expected invalid coords to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid coordinates"),
        "Should print error message about the coordinates: {}",
        stderr
    );
}

#[test]
fn test_coords_conflicts_with_city() {
    let output = run_cli(&["London", "--coords", "49.28,-123.12"]);
    assert!(
        !output.status.success(),
        "Expected city and --coords together to fail"
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use skycast::cli::{parse_coords_arg, parse_unit_arg, Cli, StartupConfig};
    use skycast::config::Config;
    use skycast::units::TemperatureUnit;

    #[test]
    fn test_cli_no_args_has_no_startup_lookup() {
        let cli = Cli::parse_from(["skycast"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.initial_city.is_none());
        assert!(config.initial_coords.is_none());
    }

    #[test]
    fn test_cli_city_words_are_joined() {
        let cli = Cli::parse_from(["skycast", "san", "francisco"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.initial_city.as_deref(), Some("san francisco"));
    }

    #[test]
    fn test_cli_unit_flag_parses() {
        let cli = Cli::parse_from(["skycast", "--unit", "f"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_parse_unit_arg_rejects_unknown() {
        assert!(parse_unit_arg("kelvin").is_err());
    }

    #[test]
    fn test_parse_coords_arg_roundtrip() {
        let (lat, lon) = parse_coords_arg("35.68,139.69").unwrap();
        assert!((lat - 35.68).abs() < 0.0001);
        assert!((lon - 139.69).abs() < 0.0001);
    }

    #[test]
    fn test_api_key_flag_feeds_config() {
        let cli = Cli::parse_from(["skycast", "--api-key", "secret"]);
        let startup = StartupConfig::from_cli(&cli).unwrap();
        let config = Config::from_sources(startup.api_key, None).unwrap();
        assert_eq!(config.api_key, "secret");
    }
}
