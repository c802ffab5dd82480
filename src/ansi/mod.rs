//! ANSI escape code processing
//!
//! This module turns text carrying SGR (Select Graphic Rendition) escape
//! sequences into escaped markup: literal text interleaved with `<span>`
//! containers that carry `ansi-*` class names and inline colors.
//!
//! The pipeline is single-pass and left to right:
//!
//! - [`tokenizer`] splits input into literal text and parameter lists
//! - [`style`] applies each parameter list to a [`StyleState`]
//! - [`color`] resolves 256-color and truecolor sub-sequences via [`palette`]
//! - [`emitter`] escapes each literal and wraps it per the current style
//! - [`renderer`] drives the above over one complete input

pub mod color;
pub mod emitter;
pub mod palette;
pub mod renderer;
pub mod style;
pub mod tokenizer;

pub use color::{ColorRef, ResolvedColor};
pub use emitter::{escape_markup, StyleRun};
pub use palette::{Rgb, PALETTE};
pub use renderer::{parse_runs, render, render_runs, AnsiRenderer};
pub use style::{StyleState, TextAttribute};
pub use tokenizer::{contains_ansi, tokenize, ParamList, Token};
