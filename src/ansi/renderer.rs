//! ANSI to markup renderer
//!
//! Drives tokenizer, state machine and emitter over one complete input.
//! Each call starts from the default style; nothing carries over between
//! calls.

use super::emitter::{emit_run, escape_markup, StyleRun};
use super::style::StyleState;
use super::tokenizer::{contains_ansi, tokenize, Token};

/// Converts text with SGR sequences into escaped, styled markup
#[derive(Debug, Clone, Copy)]
pub struct AnsiRenderer {
    /// Skip tokenizing when the input has no escape-looking substring
    fast_path: bool,
}

impl AnsiRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self { fast_path: true }
    }

    /// Renderer that always runs the full tokenize/apply/emit pipeline
    pub fn without_fast_path() -> Self {
        Self { fast_path: false }
    }

    /// Render one input to markup
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        if self.fast_path && !contains_ansi(text) {
            trace!("No SGR sequences in {} bytes, escaping only", text.len());
            return escape_markup(text).into_owned();
        }

        let tokens = tokenize(text);
        trace!("Rendering {} tokens from {} bytes", tokens.len(), text.len());

        let mut state = StyleState::default();
        let mut out = String::with_capacity(text.len() + text.len() / 2);

        for token in tokens {
            match token {
                Token::Literal(literal) => emit_run(&mut out, literal, &state),
                Token::Params(params) => state.apply(&params),
            }
        }

        out
    }

    /// Render raw bytes; input that is not valid UTF-8 renders as nothing
    pub fn render_bytes(&self, bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.render(text),
            Err(e) => {
                debug!("Input is not valid UTF-8 ({}), rendering nothing", e);
                String::new()
            }
        }
    }

    /// Split one input into style runs, each carrying its own snapshot
    pub fn parse_runs(&self, text: &str) -> Vec<StyleRun> {
        if self.fast_path && !contains_ansi(text) {
            if text.is_empty() {
                return Vec::new();
            }
            return vec![StyleRun::new(text, StyleState::default())];
        }

        let mut state = StyleState::default();
        let mut runs = Vec::new();

        for token in tokenize(text) {
            match token {
                Token::Literal(literal) => runs.push(StyleRun::new(literal, state)),
                Token::Params(params) => state.apply(&params),
            }
        }

        runs
    }
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one input with the default renderer
pub fn render(text: &str) -> String {
    AnsiRenderer::new().render(text)
}

/// Split one input into style runs with the default renderer
pub fn parse_runs(text: &str) -> Vec<StyleRun> {
    AnsiRenderer::new().parse_runs(text)
}

/// Concatenate the markup of already-parsed runs
pub fn render_runs(runs: &[StyleRun]) -> String {
    let mut out = String::new();
    for run in runs {
        emit_run(&mut out, &run.text, &run.style);
    }
    out
}
