//! Integration Tests for ANSI Color Output
//!
//! End-to-end rendering of colored terminal output into markup.

use ansi_markup::{render, AnsiRenderer};

#[path = "../test_utils/fixtures.rs"]
mod fixtures;

use fixtures::sgr;

#[test]
fn test_bold_red_then_plain() {
    assert_eq!(
        render("\x1b[1;31mBOLD RED\x1b[0mplain"),
        "<span class=\"ansi-fg-1 ansi-bold\">BOLD RED</span>plain"
    );
}

#[test]
fn test_palette_index_renders_inline() {
    let html = render(&sgr("38;5;1", "X"));
    assert_eq!(html, "<span style=\"color: #800000\">X</span>");
    assert!(!html.contains("ansi-fg-1"));
}

#[test]
fn test_palette_cube_and_grayscale() {
    assert_eq!(
        render(&sgr("48;5;196", "X")),
        "<span style=\"background-color: #ff0000\">X</span>"
    );
    assert_eq!(
        render(&sgr("38;5;232", "X")),
        "<span style=\"color: #080808\">X</span>"
    );
    assert_eq!(
        render(&sgr("38;5;255", "X")),
        "<span style=\"color: #eeeeee\">X</span>"
    );
}

#[test]
fn test_truecolor_renders_rgb() {
    assert_eq!(
        render(&sgr("38;2;10;20;30", "X")),
        "<span style=\"color: rgb(10, 20, 30)\">X</span>"
    );
}

#[test]
fn test_truncated_extended_sequence() {
    assert_eq!(render("\x1b[38mX"), "X");
    assert_eq!(
        render("\x1b[34mA\x1b[38mB"),
        "<span class=\"ansi-fg-4\">A</span><span class=\"ansi-fg-4\">B</span>"
    );
}

#[test]
fn test_bright_colors() {
    assert_eq!(
        render(&sgr("90", "X")),
        "<span class=\"ansi-fg-8\">X</span>"
    );
    assert_eq!(
        render(&sgr("97", "X")),
        "<span class=\"ansi-fg-15\">X</span>"
    );
    assert_eq!(
        render(&sgr("107", "X")),
        "<span class=\"ansi-bg-15\">X</span>"
    );
}

#[test]
fn test_script_injection_is_escaped() {
    assert_eq!(
        render("<script>alert(1)</script>"),
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
    assert_eq!(
        render("\x1b[1m<script>alert(1)</script>"),
        "<span class=\"ansi-bold\">&lt;script&gt;alert(1)&lt;/script&gt;</span>"
    );
}

#[test]
fn test_named_and_resolved_together() {
    assert_eq!(
        render(&sgr("4;42;38;2;255;128;0", "warn")),
        "<span class=\"ansi-bg-2 ansi-underline\" style=\"color: rgb(255, 128, 0)\">warn</span>"
    );
}

#[test]
fn test_stripped_escape_character() {
    assert_eq!(
        render("[1;32mPASS[0m all tests"),
        "<span class=\"ansi-fg-2 ansi-bold\">PASS</span> all tests"
    );
}

#[test]
fn test_non_sgr_sequences_pass_through() {
    assert_eq!(render("\x1b[2Kdone"), "\x1b[2Kdone");
}

#[test]
fn test_empty_and_non_text_input() {
    let renderer = AnsiRenderer::new();
    assert_eq!(renderer.render(""), "");
    assert_eq!(renderer.render_bytes(b""), "");
    assert_eq!(renderer.render_bytes(&[0xc3, 0x28]), "");
}

#[test]
fn test_sample_outputs() {
    let expected = [
        "<span class=\"ansi-fg-1\">Red text</span>",
        "<span class=\"ansi-fg-2\">Green text</span>",
        "<span class=\"ansi-bold\">Bold text</span>",
        "<span class=\"ansi-underline\">Underlined text</span>",
    ];
    for (input, expected) in fixtures::create_ansi_output().iter().zip(expected) {
        assert_eq!(render(input), expected);
    }
}
