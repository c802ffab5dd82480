//! SGR sequence tokenizer
//!
//! Splits input into literal text and SGR parameter lists. The grammar is
//! tolerant: the escape character before `[` is optional, so logs whose
//! control characters were stripped upstream (leaving `[31m`) still parse.
//! Detection and splitting share the same pattern, so input that the
//! detector calls plain is never split differently by the tokenizer.

use once_cell::sync::Lazy;
use regex::Regex;

/// `ESC? '[' (digit | ';')* 'm'`
static SGR_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b?\[([0-9;]*)m").expect("SGR regex pattern is invalid")
});

/// Ordered SGR codes from one escape sequence.
///
/// An empty list means the same as `[0]` (reset).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamList(Vec<u32>);

impl ParamList {
    pub fn new(codes: Vec<u32>) -> Self {
        Self(codes)
    }

    /// Codes to process; `[0]` for an empty list
    pub fn codes(&self) -> &[u32] {
        const RESET: &[u32] = &[0];

        if self.0.is_empty() {
            RESET
        } else {
            self.0.as_slice()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One piece of tokenized input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text between escape sequences (never empty)
    Literal(&'a str),
    /// Parameters of one SGR sequence
    Params(ParamList),
}

/// Parse the parameter text between `[` and `m`.
///
/// Fields are separated by `;`. An empty field counts as `0`; a field too
/// large for `u32` saturates to `u32::MAX`, which no code table entry uses.
pub fn parse_params(raw: &str) -> ParamList {
    if raw.is_empty() {
        return ParamList::default();
    }

    let codes = raw
        .split(';')
        .map(|field| {
            if field.is_empty() {
                0
            } else {
                field.parse::<u32>().unwrap_or(u32::MAX)
            }
        })
        .collect();

    ParamList(codes)
}

/// Whether the text contains anything that looks like an SGR sequence
pub fn contains_ansi(text: &str) -> bool {
    SGR_REGEX.is_match(text)
}

/// Split text into literal and parameter tokens, in input order.
///
/// Tokens cover the input without gaps or overlaps; empty literals are
/// dropped.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last_end = 0;

    for captures in SGR_REGEX.captures_iter(text) {
        // Group 0 is always present for a match
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let raw = captures.get(1).map_or("", |m| m.as_str());

        if whole.start() > last_end {
            tokens.push(Token::Literal(&text[last_end..whole.start()]));
        }
        tokens.push(Token::Params(parse_params(raw)));

        last_end = whole.end();
    }

    if last_end < text.len() {
        tokens.push(Token::Literal(&text[last_end..]));
    }

    tokens
}
