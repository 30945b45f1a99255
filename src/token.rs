//! Format-code tokenizer.
//!
//! Scans a flat string for the `§` marker and splits it into interleaved
//! text and code tokens. A marker is only a code when followed by a
//! recognized payload: one lowercase hex digit (palette color), one of the
//! style letters `k l m n o`, the reset letter `r`, or `#` plus exactly six
//! hex digits (case-insensitive). Anything else stays literal text —
//! malformed escapes in user text must never be an error.
//!
//! # Examples
//!
//! ```
//! use mctext::token::{tokenize, TokenKind, FormatCode};
//! use mctext::palette::PaletteColor;
//!
//! let tokens: Vec<_> = tokenize("§cHello§r").collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(
//!     tokens[0].kind,
//!     TokenKind::Code(FormatCode::Color(PaletteColor::Red))
//! );
//! assert_eq!(tokens[1].kind, TokenKind::Text("Hello"));
//! assert_eq!(tokens[2].kind, TokenKind::Code(FormatCode::Reset));
//! ```

use std::fmt;

use crate::palette::PaletteColor;
use crate::style::Attributes;

/// Marker character introducing a format code.
pub const MARKER: char = '§';

/// Coarse classification of a format code.
///
/// The cascade needs full resolution; the normalizer only needs to know
/// whether a code is color-like, style-like, or a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Palette mnemonic or hex literal: sets color, clears flags.
    Color,
    /// Style letter: toggles one flag on.
    Style,
    /// Reset letter: clears color and flags.
    Reset,
}

/// A single format code.
///
/// A code has zero-width textual footprint: it marks a transition point
/// and never consumes a glyph. Hex literals keep their six digits exactly
/// as written so that redundancy comparison stays byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatCode {
    /// Palette color addressed by its mnemonic digit.
    Color(PaletteColor),
    /// Literal RGB color, six hex digits without the leading `#`.
    Hex(String),
    /// A single style flag.
    Style(Attributes),
    /// Clears the active color and all flags.
    Reset,
}

impl FormatCode {
    /// Classify this code for the cascade and the normalizer.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Color(_) | Self::Hex(_) => Category::Color,
            Self::Style(_) => Category::Style,
            Self::Reset => Category::Reset,
        }
    }
}

impl fmt::Display for FormatCode {
    /// Writes the marker + payload form as it appears in a string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{MARKER}{}", color.mnemonic()),
            Self::Hex(digits) => write!(f, "{MARKER}#{digits}"),
            Self::Style(flags) => {
                for letter in flags.to_mnemonics() {
                    write!(f, "{MARKER}{letter}")?;
                }
                Ok(())
            }
            Self::Reset => write!(f, "{MARKER}r"),
        }
    }
}

/// One token of a scanned string, with byte offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset of the first byte of this token.
    pub start: usize,
    /// Byte offset one past the last byte of this token.
    pub end: usize,
}

/// Token payload: a literal text run or a format code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Text(&'a str),
    Code(FormatCode),
}

impl<'a> Token<'a> {
    /// The code, if this is a code token.
    #[must_use]
    pub const fn code(&self) -> Option<&FormatCode> {
        match &self.kind {
            TokenKind::Code(code) => Some(code),
            TokenKind::Text(_) => None,
        }
    }

    /// The text run, if this is a text token.
    #[must_use]
    pub const fn text(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Text(text) => Some(text),
            TokenKind::Code(_) => None,
        }
    }
}

/// Scan `text` into a lazy token sequence.
///
/// Each call starts a fresh scan at offset 0; no cursor persists between
/// calls. The yielded tokens tile the input exactly: concatenating their
/// source ranges reproduces the input.
#[must_use]
pub const fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer { text, pos: 0 }
}

/// Lazy iterator over text and code tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }

        // A code right at the cursor.
        if let Some((code, end)) = match_code(self.text, self.pos) {
            let start = self.pos;
            self.pos = end;
            return Some(Token {
                kind: TokenKind::Code(code),
                start,
                end,
            });
        }

        // Otherwise a text run up to the next valid code (or the end).
        let start = self.pos;
        let first_len = self.text[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let mut search = start + first_len;
        loop {
            match self.text[search..].find(MARKER) {
                Some(rel) => {
                    let at = search + rel;
                    if match_code(self.text, at).is_some() {
                        self.pos = at;
                        return Some(Token {
                            kind: TokenKind::Text(&self.text[start..at]),
                            start,
                            end: at,
                        });
                    }
                    // Unrecognized payload: the marker stays literal text.
                    search = at + MARKER.len_utf8();
                }
                None => {
                    self.pos = self.text.len();
                    return Some(Token {
                        kind: TokenKind::Text(&self.text[start..]),
                        start,
                        end: self.text.len(),
                    });
                }
            }
        }
    }
}

/// Try to read a format code at byte offset `at`.
///
/// Returns the code and the byte offset just past it.
fn match_code(text: &str, at: usize) -> Option<(FormatCode, usize)> {
    let mut chars = text.get(at..)?.chars();
    if chars.next()? != MARKER {
        return None;
    }
    let payload_start = at + MARKER.len_utf8();
    let first = chars.next()?;

    if first == '#' {
        let hex_start = payload_start + 1;
        let digits = text.get(hex_start..hex_start + 6)?;
        if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Some((FormatCode::Hex(digits.to_string()), hex_start + 6));
        }
        return None;
    }

    if let Some(color) = PaletteColor::from_mnemonic(first) {
        return Some((FormatCode::Color(color), payload_start + 1));
    }
    if let Some(flag) = Attributes::from_mnemonic(first) {
        return Some((FormatCode::Style(flag), payload_start + 1));
    }
    if first == 'r' {
        return Some((FormatCode::Reset, payload_start + 1));
    }
    None
}

/// Remove every format code, keeping only the literal text.
#[must_use]
pub fn strip_codes(text: &str) -> String {
    tokenize(text).filter_map(|t| t.text()).collect()
}
