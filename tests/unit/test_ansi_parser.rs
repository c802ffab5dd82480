//! Unit tests for the SGR tokenizer and style state machine

use ansi_markup::ansi::tokenizer::parse_params;
use ansi_markup::ansi::{tokenize, ColorRef, ParamList, ResolvedColor, Rgb, StyleState, Token};

fn apply(state: &mut StyleState, raw: &str) {
    state.apply(&parse_params(raw));
}

fn state_after(raw: &str) -> StyleState {
    let mut state = StyleState::default();
    apply(&mut state, raw);
    state
}

#[cfg(test)]
mod ansi_parser_tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let tokens = tokenize("Hello, World!");
        assert_eq!(tokens, vec![Token::Literal("Hello, World!")]);
    }

    #[test]
    fn test_parse_red_text() {
        let tokens = tokenize("\x1b[31mRed text\x1b[0m");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::Params(ParamList::new(vec![31])));
        assert_eq!(tokens[1], Token::Literal("Red text"));
    }

    #[test]
    fn test_parse_multiple_codes() {
        let state = state_after("1;31;44");
        assert!(state.bold);
        assert_eq!(state.fg, Some(ColorRef::Named(1)));
        assert_eq!(state.bg, Some(ColorRef::Named(4)));
    }

    #[test]
    fn test_all_flags() {
        let state = state_after("1;2;3;4;5;7;9");
        assert!(state.bold && state.dim && state.italic && state.underline);
        assert!(state.blink && state.reverse && state.strikethrough);
    }

    #[test]
    fn test_flag_resets() {
        let mut state = state_after("1;2;3;4;5;7;9");

        apply(&mut state, "22");
        assert!(!state.bold && !state.dim);
        assert!(state.italic);

        apply(&mut state, "23;24;25;27;29");
        assert!(state.is_plain());
    }

    #[test]
    fn test_bright_colors() {
        assert_eq!(state_after("90").fg, Some(ColorRef::Named(8)));
        assert_eq!(state_after("97").fg, Some(ColorRef::Named(15)));
        assert_eq!(state_after("100").bg, Some(ColorRef::Named(8)));
        assert_eq!(state_after("107").bg, Some(ColorRef::Named(15)));
    }

    #[test]
    fn test_default_colors() {
        let mut state = state_after("31;42");
        apply(&mut state, "39");
        assert_eq!(state.fg, None);
        assert_eq!(state.bg, Some(ColorRef::Named(2)));
        apply(&mut state, "49");
        assert!(state.is_plain());
    }

    #[test]
    fn test_palette_color_stays_resolved() {
        let state = state_after("38;5;1");
        assert_eq!(
            state.fg,
            Some(ColorRef::Resolved(ResolvedColor::Palette(1)))
        );
        assert_ne!(state.fg, Some(ColorRef::Named(1)));
    }

    #[test]
    fn test_truecolor() {
        let state = state_after("48;2;10;20;30;1");
        assert_eq!(
            state.bg,
            Some(ColorRef::Resolved(ResolvedColor::TrueColor(Rgb::new(
                10, 20, 30
            ))))
        );
        assert!(state.bold);
    }

    #[test]
    fn test_truncated_extended_color_keeps_prior_color() {
        let mut state = state_after("32");
        apply(&mut state, "38");
        assert_eq!(state.fg, Some(ColorRef::Named(2)));

        apply(&mut state, "38;2;1;2");
        assert_eq!(state.fg, Some(ColorRef::Named(2)));
    }

    #[test]
    fn test_out_of_range_truecolor_is_ignored() {
        let state = state_after("38;2;256;0;0");
        assert_eq!(state.fg, None);
    }

    #[test]
    fn test_unknown_codes_do_not_abort() {
        let state = state_after("6;8;26;53;31");
        assert_eq!(state.fg, Some(ColorRef::Named(1)));
        assert!(!state.bold);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = state_after("1;4;38;2;1;2;3;48;5;200");
        apply(&mut state, "0");
        assert_eq!(state, StyleState::default());

        let mut state = state_after("7;9;35");
        apply(&mut state, "");
        assert_eq!(state, StyleState::default());
    }

    #[test]
    fn test_codes_after_reset_in_same_list() {
        let state = state_after("1;0;4");
        assert!(!state.bold);
        assert!(state.underline);
    }
}
