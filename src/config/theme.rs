//! Theme and Styling Configuration
//!
//! Rendered markup refers to colors through the fixed `ansi-*` class
//! vocabulary. A theme supplies the stylesheet that gives those classes
//! their look.

use crate::ansi::palette::{named_rgb, Rgb};
use crate::ansi::style::{TextAttribute, BG_CLASSES, FG_CLASSES};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;

/// Name of the theme that matches the 256-color palette
pub const DEFAULT_THEME: &str = "xterm";

/// Class carried by the `<pre>` wrapper of standalone documents
pub const CONTAINER_CLASS: &str = "ansi-log";

/// Theme manager for ansi-markup
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Available themes
    themes: HashMap<String, Theme>,
    /// Current active theme
    current_theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Theme description
    #[serde(default)]
    pub description: String,
    /// Document background
    pub background: Rgb,
    /// Default text color
    pub foreground: Rgb,
    /// ANSI color mappings
    pub ansi_colors: AnsiColorPalette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsiColorPalette {
    /// ANSI black
    pub black: Rgb,
    /// ANSI red
    pub red: Rgb,
    /// ANSI green
    pub green: Rgb,
    /// ANSI yellow
    pub yellow: Rgb,
    /// ANSI blue
    pub blue: Rgb,
    /// ANSI magenta
    pub magenta: Rgb,
    /// ANSI cyan
    pub cyan: Rgb,
    /// ANSI white
    pub white: Rgb,
    /// ANSI bright black
    pub bright_black: Rgb,
    /// ANSI bright red
    pub bright_red: Rgb,
    /// ANSI bright green
    pub bright_green: Rgb,
    /// ANSI bright yellow
    pub bright_yellow: Rgb,
    /// ANSI bright blue
    pub bright_blue: Rgb,
    /// ANSI bright magenta
    pub bright_magenta: Rgb,
    /// ANSI bright cyan
    pub bright_cyan: Rgb,
    /// ANSI bright white
    pub bright_white: Rgb,
}

impl AnsiColorPalette {
    /// The first 16 entries of the 256-color palette
    pub fn xterm() -> Self {
        let named = |index: u8| named_rgb(index).unwrap_or(Rgb::new(0, 0, 0));
        Self::from_array(std::array::from_fn(|i| named(i as u8)))
    }

    fn from_array(colors: [Rgb; 16]) -> Self {
        let [black, red, green, yellow, blue, magenta, cyan, white, bright_black, bright_red, bright_green, bright_yellow, bright_blue, bright_magenta, bright_cyan, bright_white] =
            colors;
        Self {
            black,
            red,
            green,
            yellow,
            blue,
            magenta,
            cyan,
            white,
            bright_black,
            bright_red,
            bright_green,
            bright_yellow,
            bright_blue,
            bright_magenta,
            bright_cyan,
            bright_white,
        }
    }

    /// Colors in class index order (0-7 normal, 8-15 bright)
    pub fn to_array(&self) -> [Rgb; 16] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.magenta,
            self.cyan,
            self.white,
            self.bright_black,
            self.bright_red,
            self.bright_green,
            self.bright_yellow,
            self.bright_blue,
            self.bright_magenta,
            self.bright_cyan,
            self.bright_white,
        ]
    }

    /// Color for a named index
    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.to_array().get(usize::from(index)).copied()
    }
}

impl Theme {
    /// CSS rules for the `ansi-*` class vocabulary
    pub fn stylesheet(&self) -> String {
        let mut css = String::with_capacity(2048);

        let _ = writeln!(
            css,
            ".{} {{ background-color: {}; color: {}; }}",
            CONTAINER_CLASS, self.background, self.foreground
        );

        for (index, color) in self.ansi_colors.to_array().iter().enumerate() {
            let _ = writeln!(css, ".{} {{ color: {}; }}", FG_CLASSES[index], color);
        }
        for (index, color) in self.ansi_colors.to_array().iter().enumerate() {
            let _ = writeln!(
                css,
                ".{} {{ background-color: {}; }}",
                BG_CLASSES[index], color
            );
        }

        for attribute in TextAttribute::ALL {
            let _ = writeln!(
                css,
                ".{} {{ {} }}",
                attribute.class_name(),
                attribute_declaration(attribute)
            );
        }
        let _ = writeln!(
            css,
            ".{}.{} {{ text-decoration: underline line-through; }}",
            TextAttribute::Underline.class_name(),
            TextAttribute::Strikethrough.class_name()
        );
        css.push_str("@keyframes ansi-blink { 50% { opacity: 0; } }\n");

        css
    }
}

fn attribute_declaration(attribute: TextAttribute) -> &'static str {
    match attribute {
        TextAttribute::Bold => "font-weight: bold;",
        TextAttribute::Dim => "opacity: 0.5;",
        TextAttribute::Italic => "font-style: italic;",
        TextAttribute::Underline => "text-decoration: underline;",
        TextAttribute::Blink => "animation: ansi-blink 1s step-end infinite;",
        TextAttribute::Reverse => "filter: invert(100%);",
        TextAttribute::Strikethrough => "text-decoration: line-through;",
    }
}

impl ThemeManager {
    /// Create a new theme manager
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: DEFAULT_THEME.to_string(),
        };

        // Load built-in themes
        manager.load_builtin_themes();
        manager
    }

    /// Load built-in themes
    fn load_builtin_themes(&mut self) {
        for theme in [
            Self::create_xterm_theme(),
            Self::create_dark_theme(),
            Self::create_light_theme(),
        ] {
            self.themes.insert(theme.name.clone(), theme);
        }
    }

    /// Colors identical to palette entries 0-15
    fn create_xterm_theme() -> Theme {
        Theme {
            name: DEFAULT_THEME.to_string(),
            description: "Standard XTerm colors, matching the 256-color palette".to_string(),
            background: Rgb::new(0, 0, 0),
            foreground: Rgb::new(0xc0, 0xc0, 0xc0),
            ansi_colors: AnsiColorPalette::xterm(),
        }
    }

    /// Create the default dark theme
    fn create_dark_theme() -> Theme {
        Theme {
            name: "default-dark".to_string(),
            description: "A modern dark theme for log viewers".to_string(),
            background: Rgb::new(24, 24, 37),
            foreground: Rgb::new(229, 229, 229),
            ansi_colors: AnsiColorPalette::from_array([
                Rgb::new(0, 0, 0),
                Rgb::new(205, 49, 49),
                Rgb::new(13, 188, 121),
                Rgb::new(229, 229, 16),
                Rgb::new(36, 114, 200),
                Rgb::new(188, 63, 188),
                Rgb::new(17, 168, 205),
                Rgb::new(229, 229, 229),
                Rgb::new(102, 102, 102),
                Rgb::new(241, 76, 76),
                Rgb::new(35, 209, 139),
                Rgb::new(245, 245, 67),
                Rgb::new(59, 142, 234),
                Rgb::new(214, 112, 214),
                Rgb::new(41, 184, 219),
                Rgb::new(229, 229, 229),
            ]),
        }
    }

    /// Create the default light theme
    fn create_light_theme() -> Theme {
        Theme {
            name: "default-light".to_string(),
            description: "A clean light theme for daytime use".to_string(),
            background: Rgb::new(248, 248, 248),
            foreground: Rgb::new(36, 36, 36),
            ansi_colors: AnsiColorPalette::from_array([
                Rgb::new(0, 0, 0),
                Rgb::new(195, 39, 43),
                Rgb::new(40, 174, 96),
                Rgb::new(224, 147, 0),
                Rgb::new(66, 113, 174),
                Rgb::new(170, 60, 135),
                Rgb::new(0, 163, 181),
                Rgb::new(36, 36, 36),
                Rgb::new(102, 102, 102),
                Rgb::new(237, 85, 59),
                Rgb::new(0, 188, 120),
                Rgb::new(244, 191, 117),
                Rgb::new(59, 142, 234),
                Rgb::new(214, 112, 214),
                Rgb::new(41, 184, 219),
                Rgb::new(0, 0, 0),
            ]),
        }
    }

    /// Get the current theme
    pub fn current_theme(&self) -> Result<&Theme> {
        self.themes
            .get(&self.current_theme)
            .ok_or_else(|| Error::ThemeNotFound {
                theme_name: self.current_theme.clone(),
            })
    }

    /// Get a theme by name
    pub fn get_theme(&self, theme_name: &str) -> Option<&Theme> {
        self.themes.get(theme_name)
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme_name: &str) -> Result<()> {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            Ok(())
        } else {
            Err(Error::ThemeNotFound {
                theme_name: theme_name.to_string(),
            })
        }
    }

    /// Add a custom theme
    pub fn add_theme(&mut self, theme: Theme) -> Result<()> {
        if self.themes.contains_key(&theme.name) {
            return Err(Error::ThemeAlreadyExists {
                theme_name: theme.name.clone(),
            });
        }
        self.themes.insert(theme.name.clone(), theme);
        Ok(())
    }

    /// List all available themes, sorted by name
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
