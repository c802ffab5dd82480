//! Log conversion
//!
//! The layer between callers holding log text and the ANSI renderer.
//! A [`Converter`] decides which inputs are worth converting, converts
//! batches of log cells exactly once each, and can wrap the result in a
//! standalone document.

use crate::ansi::emitter::escape_markup;
use crate::ansi::renderer::AnsiRenderer;
use crate::ansi::tokenizer::contains_ansi;
use crate::config::theme::{Theme, CONTAINER_CLASS};
use crate::config::{Config, RenderConfig};
use crate::error::{Error, Result};
use std::fmt;

/// Why an input was left unconverted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing to convert
    Empty,
    /// No SGR-looking sequence anywhere in the input
    Plain,
    /// Input exceeds the configured size limit
    TooLarge { size: usize, limit: usize },
    /// Cell was converted by an earlier pass
    AlreadyProcessed,
}

/// One unit of log text, e.g. a table cell in a log viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCell {
    text: String,
    markup: Option<String>,
}

impl LogCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: None,
        }
    }

    /// Original text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Converted markup, if the cell has been converted
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    pub fn is_processed(&self) -> bool {
        self.markup.is_some()
    }
}

/// Counts from one batch conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub processed: usize,
    pub already_processed: usize,
    pub skipped_empty: usize,
    pub skipped_plain: usize,
    pub skipped_oversize: usize,
}

impl ConversionReport {
    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Empty => self.skipped_empty += 1,
            SkipReason::Plain => self.skipped_plain += 1,
            SkipReason::TooLarge { .. } => self.skipped_oversize += 1,
            SkipReason::AlreadyProcessed => self.already_processed += 1,
        }
    }

    /// Number of cells looked at
    pub fn total(&self) -> usize {
        self.processed
            + self.already_processed
            + self.skipped_empty
            + self.skipped_plain
            + self.skipped_oversize
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} converted, {} already converted, {} empty, {} plain, {} oversize",
            self.processed,
            self.already_processed,
            self.skipped_empty,
            self.skipped_plain,
            self.skipped_oversize
        )
    }
}

/// Converts log text to markup under the configured limits
#[derive(Debug, Clone)]
pub struct Converter {
    renderer: AnsiRenderer,
    max_input_bytes: usize,
    per_line: bool,
}

impl Converter {
    /// Create a converter from render settings
    pub fn new(render: &RenderConfig) -> Self {
        Self {
            renderer: AnsiRenderer::new(),
            max_input_bytes: render.max_input_bytes,
            per_line: render.per_line,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.render)
    }

    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    pub fn per_line(&self) -> bool {
        self.per_line
    }

    /// Decide whether a cell's text should be converted
    pub fn check_eligibility(&self, text: &str) -> std::result::Result<(), SkipReason> {
        if text.is_empty() {
            return Err(SkipReason::Empty);
        }
        if text.len() > self.max_input_bytes {
            return Err(SkipReason::TooLarge {
                size: text.len(),
                limit: self.max_input_bytes,
            });
        }
        if !contains_ansi(text) {
            return Err(SkipReason::Plain);
        }
        Ok(())
    }

    /// Convert one cell's text; `None` when it is not eligible
    pub fn convert_cell(&self, text: &str) -> Option<String> {
        match self.check_eligibility(text) {
            Ok(()) => Some(self.render(text)),
            Err(reason) => {
                debug!("Skipping cell of {} bytes: {:?}", text.len(), reason);
                None
            }
        }
    }

    /// Convert a cell in place. Cells that were already converted are left
    /// alone.
    pub fn process_cell(&self, cell: &mut LogCell) -> std::result::Result<(), SkipReason> {
        if cell.is_processed() {
            return Err(SkipReason::AlreadyProcessed);
        }
        self.check_eligibility(&cell.text)?;

        cell.markup = Some(self.render(&cell.text));
        Ok(())
    }

    /// Convert every eligible cell of a batch
    pub fn convert_all(&self, cells: &mut [LogCell]) -> ConversionReport {
        let mut report = ConversionReport::default();

        for cell in cells.iter_mut() {
            match self.process_cell(cell) {
                Ok(()) => report.processed += 1,
                Err(reason) => {
                    trace!("Cell not converted: {:?}", reason);
                    report.record_skip(reason);
                }
            }
        }

        if report.processed > 0 {
            info!("Converted {} of {} log cells", report.processed, report.total());
        } else {
            debug!("No log cells converted ({})", report);
        }
        report
    }

    /// Convert a whole input to markup.
    ///
    /// Unlike cells, plain text is still escaped so the result is always
    /// safe to embed. Inputs above the size limit are an error.
    pub fn convert_text(&self, text: &str) -> Result<String> {
        if text.len() > self.max_input_bytes {
            return Err(Error::InputTooLarge {
                size: text.len(),
                limit: self.max_input_bytes,
            });
        }

        Ok(self.render(text))
    }

    fn render(&self, text: &str) -> String {
        if !self.per_line {
            return self.renderer.render(text);
        }

        // Style state restarts on every line; line endings stay outside spans
        let mut out = String::with_capacity(text.len() + text.len() / 2);
        for line in text.split_inclusive('\n') {
            let (body, ending) = split_line_ending(line);
            out.push_str(&self.renderer.render(body));
            out.push_str(ending);
        }
        out
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Wrap converted markup in a complete document styled by `theme`
pub fn wrap_document(body: &str, title: &str, theme: &Theme) -> String {
    let stylesheet = theme.stylesheet();
    let mut out = String::with_capacity(body.len() + stylesheet.len() + 256);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    out.push_str(&escape_markup(title));
    out.push_str("</title>\n<style>\n");
    out.push_str(&stylesheet);
    out.push_str("</style>\n</head>\n<body>\n<pre class=\"");
    out.push_str(CONTAINER_CLASS);
    out.push_str("\">");
    out.push_str(body);
    out.push_str("</pre>\n</body>\n</html>\n");

    out
}
