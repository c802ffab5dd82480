//! Color references and extended-color resolution
//!
//! Direct SGR codes (30-37, 40-47, 90-97, 100-107) produce [`ColorRef::Named`],
//! which renders through the fixed class vocabulary. Extended codes
//! (`38;5;n`, `48;5;n`, `38;2;r;g;b`, `48;2;r;g;b`) produce
//! [`ColorRef::Resolved`], which renders as an inline declaration. A palette
//! index in 0-15 still resolves to an inline value even though it matches a
//! named color.

use super::palette::{palette_rgb, Rgb};

/// Extended-color sub-type selecting a 256-color palette index
const SUBTYPE_PALETTE: u32 = 5;
/// Extended-color sub-type selecting a direct RGB triple
const SUBTYPE_TRUECOLOR: u32 = 2;

/// Reference to a foreground or background color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRef {
    /// One of the 16 named colors (0-7 normal, 8-15 bright)
    Named(u8),
    /// A concrete color from the palette or a truecolor triple
    Resolved(ResolvedColor),
}

/// Concrete color produced by an extended SGR sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedColor {
    /// 256-color palette entry
    Palette(u8),
    /// Direct 24-bit color
    TrueColor(Rgb),
}

impl ResolvedColor {
    /// The concrete RGB value
    pub fn rgb(&self) -> Rgb {
        match self {
            ResolvedColor::Palette(index) => {
                palette_rgb(u32::from(*index)).unwrap_or(Rgb::new(0, 0, 0))
            }
            ResolvedColor::TrueColor(rgb) => *rgb,
        }
    }

    /// CSS value for an inline declaration: `#rrggbb` for palette colors,
    /// `rgb(r, g, b)` for truecolor
    pub fn css_value(&self) -> String {
        match self {
            ResolvedColor::Palette(_) => self.rgb().to_hex(),
            ResolvedColor::TrueColor(Rgb { r, g, b }) => format!("rgb({}, {}, {})", r, g, b),
        }
    }
}

/// Resolve the extended color introduced by the 38/48 code at `index`.
///
/// Returns the color and the index of the last sub-parameter consumed.
/// Returns `None` for an unknown sub-type, a sub-sequence cut short by the
/// end of the list, or an out-of-range value; the caller then leaves both
/// its color and its cursor untouched.
pub fn resolve_extended(codes: &[u32], index: usize) -> Option<(ResolvedColor, usize)> {
    match *codes.get(index + 1)? {
        SUBTYPE_PALETTE => {
            let palette_index = u8::try_from(*codes.get(index + 2)?).ok()?;
            Some((ResolvedColor::Palette(palette_index), index + 2))
        }
        SUBTYPE_TRUECOLOR => {
            let channel = |offset: usize| -> Option<u8> {
                u8::try_from(*codes.get(index + offset)?).ok()
            };
            let rgb = Rgb::new(channel(2)?, channel(3)?, channel(4)?);
            Some((ResolvedColor::TrueColor(rgb), index + 4))
        }
        _ => None,
    }
}
