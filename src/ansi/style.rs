//! SGR state machine
//!
//! [`StyleState`] accumulates the effect of SGR parameter lists within one
//! render call. It is a plain `Copy` value: every emitted run takes its own
//! snapshot, so later codes can never change text that was already emitted.

use super::color::{resolve_extended, ColorRef};
use super::tokenizer::ParamList;

/// Class names for named foreground colors, indexed by color
pub const FG_CLASSES: [&str; 16] = [
    "ansi-fg-0", "ansi-fg-1", "ansi-fg-2", "ansi-fg-3", "ansi-fg-4", "ansi-fg-5", "ansi-fg-6",
    "ansi-fg-7", "ansi-fg-8", "ansi-fg-9", "ansi-fg-10", "ansi-fg-11", "ansi-fg-12",
    "ansi-fg-13", "ansi-fg-14", "ansi-fg-15",
];

/// Class names for named background colors, indexed by color
pub const BG_CLASSES: [&str; 16] = [
    "ansi-bg-0", "ansi-bg-1", "ansi-bg-2", "ansi-bg-3", "ansi-bg-4", "ansi-bg-5", "ansi-bg-6",
    "ansi-bg-7", "ansi-bg-8", "ansi-bg-9", "ansi-bg-10", "ansi-bg-11", "ansi-bg-12",
    "ansi-bg-13", "ansi-bg-14", "ansi-bg-15",
];

/// Boolean text attributes, in class emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAttribute {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Strikethrough,
}

impl TextAttribute {
    pub const ALL: [TextAttribute; 7] = [
        TextAttribute::Bold,
        TextAttribute::Dim,
        TextAttribute::Italic,
        TextAttribute::Underline,
        TextAttribute::Blink,
        TextAttribute::Reverse,
        TextAttribute::Strikethrough,
    ];

    /// Class name carried by runs with this attribute
    pub fn class_name(self) -> &'static str {
        match self {
            TextAttribute::Bold => "ansi-bold",
            TextAttribute::Dim => "ansi-dim",
            TextAttribute::Italic => "ansi-italic",
            TextAttribute::Underline => "ansi-underline",
            TextAttribute::Blink => "ansi-blink",
            TextAttribute::Reverse => "ansi-reverse",
            TextAttribute::Strikethrough => "ansi-strikethrough",
        }
    }
}

/// Current style: colors plus seven independent flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    pub fg: Option<ColorRef>,
    pub bg: Option<ColorRef>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub strikethrough: bool,
}

impl StyleState {
    /// Apply one SGR parameter list, left to right.
    ///
    /// Unknown codes are skipped without affecting the rest of the list.
    pub fn apply(&mut self, params: &ParamList) {
        let codes = params.codes();
        let mut i = 0;

        while i < codes.len() {
            match codes[i] {
                0 => self.reset(),
                1 => self.bold = true,
                2 => self.dim = true,
                3 => self.italic = true,
                4 => self.underline = true,
                5 => self.blink = true,
                7 => self.reverse = true,
                9 => self.strikethrough = true,
                22 => {
                    self.bold = false;
                    self.dim = false;
                }
                23 => self.italic = false,
                24 => self.underline = false,
                25 => self.blink = false,
                27 => self.reverse = false,
                29 => self.strikethrough = false,
                code @ 30..=37 => self.fg = Some(ColorRef::Named((code - 30) as u8)),
                38 => {
                    if let Some((color, last)) = resolve_extended(codes, i) {
                        self.fg = Some(ColorRef::Resolved(color));
                        i = last;
                    }
                }
                39 => self.fg = None,
                code @ 40..=47 => self.bg = Some(ColorRef::Named((code - 40) as u8)),
                48 => {
                    if let Some((color, last)) = resolve_extended(codes, i) {
                        self.bg = Some(ColorRef::Resolved(color));
                        i = last;
                    }
                }
                49 => self.bg = None,
                code @ 90..=97 => self.fg = Some(ColorRef::Named((code - 90 + 8) as u8)),
                code @ 100..=107 => self.bg = Some(ColorRef::Named((code - 100 + 8) as u8)),
                _ => {
                    // Ignore unknown codes
                }
            }
            i += 1;
        }
    }

    /// Reset all formatting to default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no flag is set and both colors are default
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a boolean attribute is set
    pub fn has(&self, attribute: TextAttribute) -> bool {
        match attribute {
            TextAttribute::Bold => self.bold,
            TextAttribute::Dim => self.dim,
            TextAttribute::Italic => self.italic,
            TextAttribute::Underline => self.underline,
            TextAttribute::Blink => self.blink,
            TextAttribute::Reverse => self.reverse,
            TextAttribute::Strikethrough => self.strikethrough,
        }
    }

    /// Active boolean attributes, in emission order
    pub fn attributes(&self) -> impl Iterator<Item = TextAttribute> + '_ {
        TextAttribute::ALL
            .into_iter()
            .filter(move |attribute| self.has(*attribute))
    }

    /// Class names for this style: named foreground, named background,
    /// then one per active attribute
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();

        if let Some(ColorRef::Named(index)) = self.fg {
            classes.extend(FG_CLASSES.get(usize::from(index)));
        }
        if let Some(ColorRef::Named(index)) = self.bg {
            classes.extend(BG_CLASSES.get(usize::from(index)));
        }
        classes.extend(self.attributes().map(TextAttribute::class_name));

        classes
    }

    /// Inline declarations for resolved (palette or truecolor) colors
    pub fn inline_styles(&self) -> Vec<String> {
        let mut styles = Vec::new();

        if let Some(ColorRef::Resolved(color)) = self.fg {
            styles.push(format!("color: {}", color.css_value()));
        }
        if let Some(ColorRef::Resolved(color)) = self.bg {
            styles.push(format!("background-color: {}", color.css_value()));
        }

        styles
    }
}
