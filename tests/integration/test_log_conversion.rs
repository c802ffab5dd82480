//! Integration Tests for Log Conversion
//!
//! Batch cell conversion, whole-log conversion and standalone documents,
//! driven through configuration the way the command line uses them.

use ansi_markup::config::loader::ConfigLoader;
use ansi_markup::{wrap_document, Converter, Error, LogCell, SkipReason};
use std::fs;
use tempfile::TempDir;

#[path = "../test_utils/fixtures.rs"]
mod fixtures;

use fixtures::{create_container_log, create_log_cells, create_test_config, create_test_converter};

#[test]
fn test_batch_conversion_report() {
    let converter = Converter::from_config(&create_test_config());
    let mut cells = create_log_cells();

    let report = converter.convert_all(&mut cells);
    assert_eq!(report.processed, 4);
    assert_eq!(report.skipped_plain, 3);
    assert_eq!(report.skipped_empty, 1);
    assert_eq!(report.total(), cells.len());

    for cell in cells.iter().filter(|cell| cell.is_processed()) {
        let markup = cell.markup().unwrap();
        assert!(markup.starts_with("<span class=\"ansi-"));
        assert!(!markup.contains('\x1b'));
    }
}

#[test]
fn test_second_pass_converts_nothing() {
    let converter = Converter::default();
    let mut cells = create_log_cells();

    converter.convert_all(&mut cells);
    let before: Vec<LogCell> = cells.clone();
    let report = converter.convert_all(&mut cells);

    assert_eq!(report.processed, 0);
    assert_eq!(report.already_processed, 4);
    assert_eq!(cells, before);
}

#[test]
fn test_oversize_cell_left_alone() {
    let converter = create_test_converter(8, false);
    let log = create_container_log();

    assert!(converter.convert_cell(&log).is_none());
    assert_eq!(
        converter.check_eligibility(&log),
        Err(SkipReason::TooLarge {
            size: log.len(),
            limit: 8
        })
    );
    assert!(matches!(
        converter.convert_text(&log),
        Err(Error::InputTooLarge { limit: 8, .. })
    ));
}

#[test]
fn test_container_log() {
    let converter = Converter::default();
    let html = converter.convert_text(&create_container_log()).unwrap();

    assert!(html.contains("<span class=\"ansi-fg-2\">INFO</span> server listening on :8080\n"));
    assert!(html.contains("slow request &lt;GET /health&gt;"));
    assert!(html.contains("<span class=\"ansi-fg-1 ansi-bold\">ERROR</span> upstream &quot;db&quot; unreachable"));
    assert!(html.contains("<span style=\"color: #808080\">DEBUG</span> retry in 5s"));
}

#[test]
fn test_style_does_not_leak_across_lines_in_per_line_mode() {
    let input = "\x1b[31mred line\nnext line";

    let whole = create_test_converter(1024, false).convert_text(input).unwrap();
    assert_eq!(whole, "<span class=\"ansi-fg-1\">red line\nnext line</span>");

    let per_line = create_test_converter(1024, true).convert_text(input).unwrap();
    assert_eq!(per_line, "<span class=\"ansi-fg-1\">red line</span>\nnext line");
}

#[test]
fn test_config_file_drives_conversion() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ansi-markup.toml");
    fs::write(
        &config_path,
        "[render]\nper_line = true\n\n[output]\nstandalone = true\ntitle = \"build #42\"\n\n[theme]\nname = \"default-light\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&config_path).unwrap();
    let converter = Converter::from_config(&config);
    assert!(converter.per_line());

    let themes = config.theme_manager().unwrap();
    let theme = themes.current_theme().unwrap();
    assert_eq!(theme.name, "default-light");

    let body = converter.convert_text("\x1b[32mok\x1b[0m").unwrap();
    let doc = wrap_document(&body, &config.output.title, theme);
    assert!(doc.contains("<title>build #42</title>"));
    assert!(doc.contains(".ansi-log { background-color: #f8f8f8; color: #242424; }"));
    assert!(doc.contains("<pre class=\"ansi-log\"><span class=\"ansi-fg-2\">ok</span></pre>"));
}

#[test]
fn test_unknown_theme_in_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{ "theme": { "name": "nope" } }"#).unwrap();

    assert!(matches!(
        ConfigLoader::load_from_path(&config_path),
        Err(Error::ConfigValidationFailed { .. })
    ));
}
