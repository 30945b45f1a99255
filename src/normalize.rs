//! Redundant-code removal.
//!
//! Editing (typing, pasting, toolbar toggles) accumulates format codes
//! that no longer change anything: a bold code inside bold text, a color
//! immediately overridden by another color, back-to-back resets. The
//! normalizer rewrites a string into an equivalent minimal form in two
//! passes over the token list:
//!
//! 1. **Supersede pass** — inside each maximal run of adjacent codes,
//!    everything before the last color-or-reset code is dead (that code
//!    wipes color and flags anyway) and is dropped.
//! 2. **Stateful pass** — a left-to-right scan with the running active
//!    color, active flags, and a reset latch drops codes that restate the
//!    current state.
//!
//! Redundancy is textual: a hex literal never equals a palette mnemonic,
//! and two hex literals must match byte-for-byte.
//!
//! # Examples
//!
//! ```
//! use mctext::normalize::normalize;
//!
//! assert_eq!(normalize("§l§ltext"), "§ltext");
//! assert_eq!(normalize("§c§dtext"), "§dtext");
//! ```

use crate::style::Attributes;
use crate::token::{Category, FormatCode, Token, TokenKind, tokenize};

/// Rewrite `text` with redundant format codes removed.
///
/// Idempotent: normalizing a normalized string changes nothing. Literal
/// text, including unrecognized `§` escapes, passes through untouched.
#[must_use]
pub fn normalize(text: &str) -> String {
    let tokens: Vec<Token<'_>> = tokenize(text).collect();
    let tokens = collapse_superseded(tokens);

    let mut active_color: Option<FormatCode> = None;
    let mut active_styles = Attributes::empty();
    let mut active_reset = false;

    let mut out = String::with_capacity(text.len());
    for token in tokens {
        match token.kind {
            TokenKind::Text(run) => out.push_str(run),
            TokenKind::Code(code) => {
                let redundant = match &code {
                    FormatCode::Color(_) | FormatCode::Hex(_) => {
                        active_reset = false;
                        if active_color.as_ref() == Some(&code) {
                            true
                        } else {
                            active_color = Some(code.clone());
                            active_styles = Attributes::empty();
                            false
                        }
                    }
                    FormatCode::Style(flag) => {
                        active_reset = false;
                        if active_styles.contains(*flag) {
                            true
                        } else {
                            active_styles.insert(*flag);
                            false
                        }
                    }
                    FormatCode::Reset => {
                        let was_reset = active_reset;
                        active_reset = true;
                        active_color = None;
                        active_styles = Attributes::empty();
                        was_reset
                    }
                };

                if redundant {
                    log::debug!("normalize: dropping redundant code {code}");
                } else {
                    out.push_str(&code.to_string());
                }
            }
        }
    }

    out
}

/// Supersede pass: within each maximal run of adjacent code tokens, keep
/// only the suffix starting at the run's last color-or-reset code. Runs
/// of pure style codes are kept whole.
fn collapse_superseded(tokens: Vec<Token<'_>>) -> Vec<Token<'_>> {
    fn flush<'a>(run: &mut Vec<Token<'a>>, out: &mut Vec<Token<'a>>) {
        let cut = run
            .iter()
            .rposition(|t| {
                t.code()
                    .is_some_and(|c| c.category() != Category::Style)
            })
            .unwrap_or(0);
        if cut > 0 {
            log::debug!("normalize: {cut} code(s) superseded in a run");
        }
        out.extend(run.drain(..).skip(cut));
    }

    let mut out = Vec::with_capacity(tokens.len());
    let mut run: Vec<Token<'_>> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Code(_) => run.push(token),
            TokenKind::Text(_) => {
                flush(&mut run, &mut out);
                out.push(token);
            }
        }
    }
    flush(&mut run, &mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize("hello world"), "hello world");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_duplicate_style_dropped() {
        assert_eq!(normalize("§l§ltext"), "§ltext");
    }

    #[test]
    fn test_superseded_color_dropped() {
        assert_eq!(normalize("§c§dtext"), "§dtext");
    }

    #[test]
    fn test_superseded_run_keeps_last_color() {
        // Styles and a color all die at the final color.
        assert_eq!(normalize("§l§4§n§ctext"), "§ctext");
    }

    #[test]
    fn test_trailing_styles_survive_supersede() {
        // Codes after the last color are not superseded by it.
        assert_eq!(normalize("§l§c§ntext"), "§c§ntext");
    }

    #[test]
    fn test_pure_style_run_kept_whole() {
        assert_eq!(normalize("§l§ntext"), "§l§ntext");
    }

    #[test]
    fn test_reset_superseded_by_color() {
        assert_eq!(normalize("§r§dtext"), "§dtext");
    }

    #[test]
    fn test_repeated_color_across_text() {
        // Redundancy tracking spans text runs.
        assert_eq!(normalize("§cfoo§cbar"), "§cfoobar");
    }

    #[test]
    fn test_repeated_style_across_text() {
        assert_eq!(normalize("§lfoo§lbar"), "§lfoobar");
    }

    #[test]
    fn test_color_change_resets_style_tracking() {
        // §d clears bold, so the second §l is meaningful again.
        assert_eq!(normalize("§lfoo§dbar§lbaz"), "§lfoo§dbar§lbaz");
    }

    #[test]
    fn test_consecutive_resets_collapse() {
        assert_eq!(normalize("§cfoo§r§rbar"), "§cfoo§rbar");
    }

    #[test]
    fn test_second_reset_redundant_even_across_text() {
        // Nothing re-arms the state between the two resets.
        assert_eq!(normalize("foo§rbar§rbaz"), "foo§rbarbaz");
    }

    #[test]
    fn test_color_between_resets_keeps_both() {
        assert_eq!(normalize("foo§rbar§cqux§rbaz"), "foo§rbar§cqux§rbaz");
    }

    #[test]
    fn test_hex_never_equals_palette() {
        // #FF5555 is the same RGB as §c but textually distinct.
        assert_eq!(normalize("§c§#FF5555text"), "§#FF5555text");
        assert_eq!(normalize("§#FF5555foo§cbar"), "§#FF5555foo§cbar");
    }

    #[test]
    fn test_hex_comparison_is_case_sensitive() {
        let input = "§#ff0000foo§#FF0000bar";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_repeated_hex_dropped() {
        assert_eq!(normalize("§#FF0000foo§#FF0000bar"), "§#FF0000foobar");
    }

    #[test]
    fn test_unrecognized_escape_passes_through() {
        assert_eq!(normalize("§zfoo§"), "§zfoo§");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "§l§4§n§ctext",
            "§cfoo§cbar§r§r",
            "§l§c§nmix§zstray",
            "plain",
            "§#AbCdEf§#AbCdEfdup",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
