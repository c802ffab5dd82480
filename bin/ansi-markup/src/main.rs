//! ansi-markup - convert ANSI colored logs to HTML markup
//!
//! Reads log text from files or stdin and writes escaped markup to stdout
//! or a file. Diagnostics go to stderr so stdout carries only markup.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use ansi_markup::{load_config, wrap_document, Config, Converter};

/// Convert ANSI colored terminal output to HTML markup
#[derive(Parser, Debug)]
#[command(name = "ansi-markup", version, about)]
struct Cli {
    /// Input files ("-" for stdin); reads stdin when none are given
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Convert each line independently
    #[arg(long)]
    per_line: bool,

    /// Emit a complete document with an embedded stylesheet
    #[arg(long, short = 's')]
    standalone: bool,

    /// Document title for standalone output
    #[arg(long)]
    title: Option<String>,

    /// Theme used for stylesheets
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Largest input to convert, in bytes
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Print the stylesheet for the selected theme and exit
    #[arg(long)]
    stylesheet: bool,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Enable debug logging (ANSI_MARKUP_DEBUG accepts 1/true/yes/on)
    #[arg(
        long,
        short = 'd',
        env = "ANSI_MARKUP_DEBUG",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    debug: bool,
}

impl Cli {
    /// Command line flags take priority over configuration files
    fn apply_overrides(&self, config: &mut Config) {
        if self.per_line {
            config.render.per_line = true;
        }
        if let Some(max_bytes) = self.max_bytes {
            config.render.max_input_bytes = max_bytes;
        }
        if self.standalone {
            config.output.standalone = true;
        }
        if let Some(title) = &self.title {
            config.output.title = title.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme.name = theme.clone();
        }
    }
}

/// Level used when `RUST_LOG` is not set
fn default_log_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

fn init_logging(debug: bool) {
    let log_level = default_log_level(debug);

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(text)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    debug!("Starting {} v{}", ansi_markup::NAME, ansi_markup::VERSION);

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    if cli.list_themes {
        let themes = config.theme_manager()?;
        for name in themes.list_themes() {
            println!("{}", name);
        }
        return Ok(());
    }

    let themes = config.theme_manager()?;
    let theme = themes.current_theme()?;

    if cli.stylesheet {
        print!("{}", theme.stylesheet());
        return Ok(());
    }

    let converter = Converter::from_config(&config);

    let mut body = String::new();
    if cli.inputs.is_empty() {
        body.push_str(&converter.convert_text(&read_stdin()?)?);
    } else {
        for path in &cli.inputs {
            let text = read_input(path)?;
            let markup = converter
                .convert_text(&text)
                .with_context(|| format!("Failed to convert {}", path.display()))?;
            info!("Converted {} ({} bytes)", path.display(), text.len());
            body.push_str(&markup);
        }
    }

    let output = if config.output.standalone {
        wrap_document(&body, &config.output.title, theme)
    } else {
        body
    };

    match &cli.output {
        Some(path) => {
            if path.is_dir() {
                bail!("Output path {} is a directory", path.display());
            }
            fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
