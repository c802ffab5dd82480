//! Configuration management for ansi-markup
//!
//! Rendering limits, output wrapping, and theme selection. Every field has
//! a default, so partial configuration files are valid.

pub mod loader;
pub mod theme;

use crate::config::theme::{Theme, ThemeManager, DEFAULT_THEME};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Inputs above this size are passed through unconverted
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1_000_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion behaviour
    pub render: RenderConfig,

    /// Output document shape
    pub output: OutputConfig,

    /// Stylesheet selection
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Largest input converted; bigger inputs are left as they are
    pub max_input_bytes: usize,

    /// Convert each line on its own instead of the whole input at once
    pub per_line: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            per_line: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Wrap output in a complete document with an embedded stylesheet
    pub standalone: bool,

    /// Document title for standalone output
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            title: "ANSI log".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Active theme name
    pub name: String,

    /// Additional user-defined themes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<Theme>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            custom: Vec::new(),
        }
    }
}

impl Config {
    /// Theme manager holding the built-in themes plus any custom ones, with
    /// the configured theme selected
    pub fn theme_manager(&self) -> Result<ThemeManager> {
        let mut manager = ThemeManager::new();
        for theme in &self.theme.custom {
            manager.add_theme(theme.clone())?;
        }
        manager.set_theme(&self.theme.name)?;
        Ok(manager)
    }

    /// Check field ranges and cross-references
    pub fn validate(&self) -> Result<()> {
        if self.render.max_input_bytes == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "render.max_input_bytes".to_string(),
                reason: "Maximum input size must be greater than 0".to_string(),
            });
        }

        if self.theme.name.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "theme.name".to_string(),
                reason: "Theme name cannot be empty".to_string(),
            });
        }

        if self.output.standalone && self.output.title.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "output.title".to_string(),
                reason: "Standalone output needs a title".to_string(),
            });
        }

        self.theme_manager()
            .map_err(|e| Error::ConfigValidationFailed {
                field: "theme".to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

/// Configuration utilities
pub mod utils {
    use super::loader::ConfigFormat;
    use std::path::Path;

    /// Get configuration format from file extension
    pub fn get_config_format(path: &Path) -> Option<ConfigFormat> {
        match path.extension()?.to_str()? {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}
