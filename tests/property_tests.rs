//! Property-based tests for mctext.
//!
//! Uses proptest to verify invariants over generated formatted strings
//! and gradients. These tests verify fundamental properties that should
//! always hold.

use proptest::prelude::*;

use mctext::cascade::{SpanKind, resolve_spans, style_at};
use mctext::gradient::{GradientStop, apply_gradient, sample_gradient};
use mctext::normalize::normalize;
use mctext::rgba::Rgba;
use mctext::token::{TokenKind, strip_codes, tokenize};

// ============================================================================
// Custom Strategies
// ============================================================================

/// Generate a single valid format code as a string.
fn format_code() -> impl Strategy<Value = String> {
    prop_oneof![
        // Palette color mnemonics and style/reset letters.
        "§[0-9a-fk-or]",
        // Hex literals, mixed case.
        "§#[0-9a-fA-F]{6}",
    ]
}

/// Generate a text fragment, possibly containing stray markers.
fn text_fragment() -> impl Strategy<Value = String> {
    "[ -~§]{0,8}"
}

/// Generate a formatted string: interleaved text and codes.
fn formatted_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![format_code(), text_fragment()], 0..12)
        .prop_map(|pieces| pieces.concat())
}

/// Like [`formatted_string`], but with no stray markers in the text.
///
/// Removing a code can fuse its neighbors, so a stray `§` next to a
/// removed code may scan as a brand-new code afterwards. The normalizer
/// guarantees only cover marker-free text runs.
fn clean_formatted_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![format_code(), "[ -~]{0,8}"], 0..12)
        .prop_map(|pieces| pieces.concat())
}

/// Generate a gradient stop at a position in 0.0-1.0.
fn gradient_stop() -> impl Strategy<Value = GradientStop> {
    (0.0f64..=1.0, any::<(u8, u8, u8)>()).prop_map(|(position, (r, g, b))| GradientStop {
        position,
        color: Rgba::new(r, g, b),
    })
}

fn stop_list() -> impl Strategy<Value = Vec<GradientStop>> {
    prop::collection::vec(gradient_stop(), 1..6)
}

// ============================================================================
// Tokenizer Properties
// ============================================================================

proptest! {
    /// Tokens tile the input exactly: contiguous, in order, covering it.
    #[test]
    fn prop_tokens_tile_input(input in formatted_string()) {
        let mut next = 0;
        for token in tokenize(&input) {
            prop_assert_eq!(token.start, next);
            prop_assert!(token.end > token.start);
            next = token.end;
        }
        prop_assert_eq!(next, input.len());
    }

    /// Reconstructing tokens from their source ranges reproduces the input.
    #[test]
    fn prop_tokens_reproduce_input(input in formatted_string()) {
        let rebuilt: String = tokenize(&input)
            .map(|t| input[t.start..t.end].to_string())
            .collect();
        prop_assert_eq!(rebuilt, input);
    }

    /// Stripping a marker-free formatted string leaves no codes behind.
    #[test]
    fn prop_strip_codes_removes_all_codes(input in clean_formatted_string()) {
        let stripped = strip_codes(&input);
        let has_code = tokenize(&stripped)
            .any(|t| matches!(t.kind, TokenKind::Code(_)));
        prop_assert!(!has_code);
    }
}

// ============================================================================
// Cascade Properties
// ============================================================================

proptest! {
    /// Spans tile [0, len) with no gaps, overlap, or trailing empties.
    #[test]
    fn prop_spans_tile_input(input in formatted_string()) {
        let spans = resolve_spans(&input);
        let mut next = 0;
        for span in &spans {
            prop_assert_eq!(span.start, next);
            prop_assert!(span.end > span.start);
            next = span.end;
        }
        prop_assert_eq!(next, input.len());
    }

    /// Concatenating text-span sources equals the code-stripped input.
    #[test]
    fn prop_text_spans_concat_to_stripped(input in formatted_string()) {
        let concat: String = resolve_spans(&input)
            .iter()
            .filter(|s| matches!(s.kind, SpanKind::Text(_)))
            .map(|s| input[s.start..s.end].to_string())
            .collect();
        prop_assert_eq!(concat, strip_codes(&input));
    }

    /// style_at at a text span's start agrees with the span's own state.
    #[test]
    fn prop_style_at_agrees_with_spans(input in formatted_string()) {
        for span in resolve_spans(&input) {
            if let SpanKind::Text(state) = &span.kind {
                prop_assert_eq!(&style_at(&input, span.start), state);
            }
        }
    }
}

// ============================================================================
// Normalizer Properties
// ============================================================================

proptest! {
    /// Normalization is idempotent.
    #[test]
    fn prop_normalize_idempotent(input in clean_formatted_string()) {
        let once = normalize(&input);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    /// Normalization never touches literal text.
    #[test]
    fn prop_normalize_preserves_text(input in clean_formatted_string()) {
        prop_assert_eq!(strip_codes(&normalize(&input)), strip_codes(&input));
    }

    /// Normalization preserves the resolved style at end of string.
    #[test]
    fn prop_normalize_preserves_final_style(input in clean_formatted_string()) {
        let normalized = normalize(&input);
        prop_assert_eq!(
            style_at(&input, input.len()),
            style_at(&normalized, normalized.len())
        );
    }
}

// ============================================================================
// Gradient Properties
// ============================================================================

proptest! {
    /// sample_gradient returns exactly the requested number of colors.
    #[test]
    fn prop_sample_count(stops in stop_list(), count in 1usize..64) {
        let samples = sample_gradient(&stops, count, true).unwrap();
        prop_assert_eq!(samples.len(), count);
    }

    /// Two-stop gradients hit both endpoint colors exactly.
    #[test]
    fn prop_two_stop_endpoints(
        (r1, g1, b1) in any::<(u8, u8, u8)>(),
        (r2, g2, b2) in any::<(u8, u8, u8)>(),
        count in 2usize..32,
    ) {
        let stops = [
            GradientStop { position: 0.0, color: Rgba::new(r1, g1, b1) },
            GradientStop { position: 1.0, color: Rgba::new(r2, g2, b2) },
        ];
        let samples = sample_gradient(&stops, count, true).unwrap();
        let first = samples[0];
        let last = samples[count - 1];
        prop_assert_eq!((first.red, first.green, first.blue), (r1, g1, b1));
        prop_assert_eq!((last.red, last.green, last.blue), (r2, g2, b2));
    }

    /// Every sample of an ignore-alpha run is opaque.
    #[test]
    fn prop_ignore_alpha_forces_opaque(stops in stop_list(), count in 1usize..32) {
        for sample in sample_gradient(&stops, count, true).unwrap() {
            prop_assert_eq!(sample.alpha, Some(1.0));
        }
    }

    /// apply_gradient emits exactly one code per non-whitespace char and
    /// leaves the underlying text unchanged.
    #[test]
    fn prop_apply_gradient_code_count(text in "[ -~]{0,40}") {
        let out = apply_gradient(
            &text,
            "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)",
        ).unwrap();
        let expected = text.chars().filter(|c| !c.is_whitespace()).count();
        prop_assert_eq!(out.matches('§').count(), expected);
        if expected > 0 {
            prop_assert_eq!(strip_codes(&out), text);
        } else {
            prop_assert_eq!(out, "");
        }
    }
}
