//! Left-to-right style resolution over a formatted string.
//!
//! The cascade folds format codes into a running [`StyleState`] and cuts
//! the string into spans: each text run carries the state in effect when
//! it starts, and each code occupies its own byte range so callers can
//! hide or highlight the code characters themselves. Spans tile the whole
//! input with no gaps and no trailing empty span.
//!
//! # Examples
//!
//! ```
//! use mctext::cascade::{resolve_spans, SpanKind};
//! use mctext::palette::PaletteColor;
//! use mctext::style::StyleColor;
//!
//! let spans = resolve_spans("§cHello");
//! assert_eq!(spans.len(), 2);
//! let SpanKind::Text(state) = &spans[1].kind else {
//!     panic!("expected text span");
//! };
//! assert_eq!(state.color, Some(StyleColor::Palette(PaletteColor::Red)));
//! assert!(state.attributes.is_empty());
//! ```

use crate::style::StyleState;
use crate::token::{TokenKind, tokenize};

/// One resolved region of a formatted string, in byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

/// What a span covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// A literal text run with the style active at its start.
    Text(StyleState),
    /// The characters of a format code. Zero glyphs, nonzero bytes.
    Code,
}

impl StyleSpan {
    /// The resolved style, if this is a text span.
    #[must_use]
    pub const fn state(&self) -> Option<&StyleState> {
        match &self.kind {
            SpanKind::Text(state) => Some(state),
            SpanKind::Code => None,
        }
    }
}

/// Resolve a string into styled spans.
///
/// A pure left-to-right fold: no code can affect text before it. The
/// returned spans tile `[0, text.len())` exactly; concatenating the
/// source ranges of the text spans yields the input with every code
/// removed.
#[must_use]
pub fn resolve_spans(text: &str) -> Vec<StyleSpan> {
    let mut state = StyleState::new();
    let mut spans = Vec::new();

    for token in tokenize(text) {
        match token.kind {
            TokenKind::Code(code) => {
                state.apply(&code);
                spans.push(StyleSpan {
                    start: token.start,
                    end: token.end,
                    kind: SpanKind::Code,
                });
            }
            TokenKind::Text(_) => {
                spans.push(StyleSpan {
                    start: token.start,
                    end: token.end,
                    kind: SpanKind::Text(state.clone()),
                });
            }
        }
    }

    spans
}

/// The style in effect at byte `offset`.
///
/// Folds every code that starts strictly before `offset`, so an offset
/// inside or at the end of a code sees that code already applied.
/// Offsets past the end of the string see the final state.
#[must_use]
pub fn style_at(text: &str, offset: usize) -> StyleState {
    let mut state = StyleState::new();
    for token in tokenize(text) {
        if token.start >= offset {
            break;
        }
        if let TokenKind::Code(code) = &token.kind {
            state.apply(code);
        }
    }
    state
}
