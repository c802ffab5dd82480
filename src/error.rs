//! Error types and Result aliases for ansi-markup
//!
//! The ANSI core never fails: malformed or unknown sequences are ignored.
//! These errors only cover the edges around it (configuration, themes,
//! input limits and I/O).

use std::path::PathBuf;

/// Result type alias for ansi-markup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ansi-markup
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    // === Theme errors ===
    /// Theme not found
    #[error("Theme '{theme_name}' not found")]
    ThemeNotFound { theme_name: String },

    /// Theme already exists
    #[error("Theme '{theme_name}' already exists")]
    ThemeAlreadyExists { theme_name: String },

    /// Invalid hex color in a theme definition
    #[error("Invalid hex color: '{value}'")]
    InvalidHexColor { value: String },

    // === Conversion errors ===
    /// Input exceeds the configured size limit
    #[error("Input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    // === I/O and serialization errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
