//! Run emission and markup escaping

use super::style::StyleState;
use std::borrow::Cow;

/// A span of text with the style that was active when it was emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    pub text: String,
    pub style: StyleState,
}

impl StyleRun {
    pub fn new(text: impl Into<String>, style: StyleState) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Render this run as escaped, optionally wrapped, markup
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 32);
        emit_run(&mut out, &self.text, &self.style);
        out
    }
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

/// Escape markup special characters into the output buffer
pub fn escape_markup_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escape markup special characters; borrows when nothing needs escaping
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 8 + 8);
    escape_markup_into(&mut out, text);
    Cow::Owned(out)
}

/// Append one literal span under the given style.
///
/// Plain styles emit the escaped text alone; anything else wraps it in a
/// `<span>` carrying class names for flags and named colors and an inline
/// `style` for resolved colors. Empty spans emit nothing.
pub fn emit_run(out: &mut String, text: &str, style: &StyleState) {
    if text.is_empty() {
        return;
    }

    if style.is_plain() {
        escape_markup_into(out, text);
        return;
    }

    let classes = style.classes();
    let styles = style.inline_styles();

    out.push_str("<span");
    if !classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&classes.join(" "));
        out.push('"');
    }
    if !styles.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&styles.join("; "));
        out.push('"');
    }
    out.push('>');
    escape_markup_into(out, text);
    out.push_str("</span>");
}
