//! ansi-markup - ANSI SGR escape sequences to styled markup
//!
//! This library converts text carrying terminal color and style escape
//! sequences (as found in CI output and container logs) into escaped
//! markup: `<span>` containers with `ansi-*` class names for named colors
//! and text attributes, and inline colors for 256-color and truecolor
//! values.
//!
//! ## Features
//!
//! - **SGR parsing:** Reset, bold, dim, italic, underline, blink, reverse,
//!   strikethrough and their resets
//! - **Colors:** 16 named colors as classes, 256-color palette and 24-bit
//!   truecolor as inline styles
//! - **Tolerant input:** Sequences whose escape character was stripped
//!   upstream (`[31m`) are still recognized
//! - **Safe output:** Every piece of literal text is escaped exactly once
//! - **Themes:** Stylesheets for the class vocabulary, built-in or custom
//! - **Configuration:** TOML or JSON configuration files
//!
//! ## Module Organization
//!
//! - [`ansi`] - Tokenizer, style state machine, color resolution, emitter
//! - [`convert`] - Eligibility checks, batch cell conversion, documents
//! - [`config`] - Configuration loading and themes
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! let html = ansi_markup::render("\x1b[1;31mBOLD RED\x1b[0mplain");
//! assert_eq!(html, "<span class=\"ansi-fg-1 ansi-bold\">BOLD RED</span>plain");
//! ```

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod config;
pub mod convert;
pub mod error;

// Re-exports for core functionality
pub use ansi::{contains_ansi, escape_markup, parse_runs, render, AnsiRenderer, StyleRun};
pub use config::Config;
pub use convert::{wrap_document, ConversionReport, Converter, LogCell, SkipReason};
pub use error::{Error, Result};

// Convenience re-exports for common types
pub use config::loader::{ConfigLoader, LoadOptions};
pub use config::theme::{Theme, ThemeManager};

use std::path::Path;

// Version information
/// The current version of ansi-markup from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The library name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The library description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration for a conversion run.
///
/// An explicit path, or a file named by `ANSI_MARKUP_CONFIG`, must load
/// and validate. Otherwise the default search locations are tried and any
/// failure falls back to the built-in defaults.
///
/// # Examples
///
/// ```no_run
/// let config = ansi_markup::load_config(None).unwrap();
/// let converter = ansi_markup::Converter::from_config(&config);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return ConfigLoader::load_from_path(path);
    }

    let mut loader = ConfigLoader::new();
    let options = LoadOptions::default();
    if loader.explicit_path().is_some() {
        return loader.load_from_search_paths(&options);
    }

    match loader.load_from_search_paths(&options) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Ok(Config::default())
        }
    }
}

/// Get default configuration
pub fn default_config() -> Config {
    Config::default()
}
