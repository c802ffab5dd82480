//! 256-color palette
//!
//! Standard XTerm layout: 16 named/bright colors, a 6x6x6 RGB cube over
//! the levels {0, 95, 135, 175, 215, 255}, and a 24-step grayscale ramp.
//! The table is built at compile time and never mutated.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create color from hex string (e.g., "#ff0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexColor {
                value: hex.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidHexColor {
                value: hex.to_string(),
            })
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lower-case `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// The 16 named colors (indices 0-7 normal, 8-15 bright)
const NAMED: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // Black
    Rgb::new(0x80, 0x00, 0x00), // Red
    Rgb::new(0x00, 0x80, 0x00), // Green
    Rgb::new(0x80, 0x80, 0x00), // Yellow
    Rgb::new(0x00, 0x00, 0x80), // Blue
    Rgb::new(0x80, 0x00, 0x80), // Magenta
    Rgb::new(0x00, 0x80, 0x80), // Cyan
    Rgb::new(0xc0, 0xc0, 0xc0), // White
    Rgb::new(0x80, 0x80, 0x80), // Bright Black (Gray)
    Rgb::new(0xff, 0x00, 0x00), // Bright Red
    Rgb::new(0x00, 0xff, 0x00), // Bright Green
    Rgb::new(0xff, 0xff, 0x00), // Bright Yellow
    Rgb::new(0x00, 0x00, 0xff), // Bright Blue
    Rgb::new(0xff, 0x00, 0xff), // Bright Magenta
    Rgb::new(0x00, 0xff, 0xff), // Bright Cyan
    Rgb::new(0xff, 0xff, 0xff), // Bright White
];

/// Channel levels of the 6x6x6 color cube
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

const CUBE_START: usize = 16;
const GRAYSCALE_START: usize = 232;

/// Palette index to RGB lookup table
pub const PALETTE: [Rgb; 256] = build_palette();

const fn build_palette() -> [Rgb; 256] {
    let mut table = [Rgb::new(0, 0, 0); 256];

    let mut i = 0;
    while i < CUBE_START {
        table[i] = NAMED[i];
        i += 1;
    }

    while i < GRAYSCALE_START {
        let n = i - CUBE_START;
        table[i] = Rgb::new(
            CUBE_LEVELS[n / 36],
            CUBE_LEVELS[(n / 6) % 6],
            CUBE_LEVELS[n % 6],
        );
        i += 1;
    }

    while i < PALETTE_SIZE {
        let level = (8 + 10 * (i - GRAYSCALE_START)) as u8;
        table[i] = Rgb::new(level, level, level);
        i += 1;
    }

    table
}

/// Number of palette entries
pub const PALETTE_SIZE: usize = 256;

/// Look up a palette index; `None` when the index is outside 0-255
pub fn palette_rgb(index: u32) -> Option<Rgb> {
    usize::try_from(index)
        .ok()
        .and_then(|i| PALETTE.get(i))
        .copied()
}

/// RGB value of one of the 16 named colors
pub fn named_rgb(index: u8) -> Option<Rgb> {
    NAMED.get(usize::from(index)).copied()
}
