//! Test Fixtures
//!
//! Common log samples and helpers shared by the integration tests

#![allow(dead_code)]

use ansi_markup::config::RenderConfig;
use ansi_markup::{Config, Converter, LogCell};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config::default()
}

/// Converter with a custom size limit
pub fn create_test_converter(max_input_bytes: usize, per_line: bool) -> Converter {
    Converter::new(&RenderConfig {
        max_input_bytes,
        per_line,
    })
}

/// Wrap text in an SGR sequence and a trailing reset
pub fn sgr(codes: &str, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", codes, text)
}

/// Create sample ANSI output for testing
pub fn create_ansi_output() -> Vec<String> {
    vec![
        "\x1b[31mRed text\x1b[0m".to_string(),
        "\x1b[32mGreen text\x1b[0m".to_string(),
        "\x1b[1mBold text\x1b[0m".to_string(),
        "\x1b[4mUnderlined text\x1b[0m".to_string(),
    ]
}

/// Create sample plain output for testing
pub fn create_plain_output() -> Vec<String> {
    vec![
        "Starting build".to_string(),
        "Compiling 12 crates".to_string(),
        "Finished in 3.2s".to_string(),
    ]
}

/// A container log as a viewer would show it: timestamps, levels in
/// color, and one line whose escape characters were stripped upstream
pub fn create_container_log() -> String {
    [
        "2024-05-01T12:00:00Z \x1b[32mINFO\x1b[0m server listening on :8080",
        "2024-05-01T12:00:01Z \x1b[33mWARN\x1b[0m slow request <GET /health>",
        "2024-05-01T12:00:02Z [1;31mERROR[0m upstream \"db\" unreachable",
        "2024-05-01T12:00:03Z \x1b[38;5;244mDEBUG\x1b[39m retry in 5s",
    ]
    .join("\n")
}

/// Log cells mixing styled, plain and empty content
pub fn create_log_cells() -> Vec<LogCell> {
    create_ansi_output()
        .into_iter()
        .chain(create_plain_output())
        .chain(std::iter::once(String::new()))
        .map(LogCell::new)
        .collect()
}
