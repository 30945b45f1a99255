//! # mctext
//!
//! An engine for Minecraft-style inline formatting codes: the `§`
//! mini-language of color and style escapes embedded in dialog text.
//!
//! ## Quick Start
//!
//! ```rust
//! use mctext::prelude::*;
//!
//! // Scan a formatted string into styled spans.
//! let spans = resolve_spans("§cHello§r world");
//!
//! // Drop codes that no longer change anything.
//! assert_eq!(normalize("§l§ltext"), "§ltext");
//!
//! // Paint a gradient across a string, one code per character.
//! let out = apply_gradient(
//!     "AB",
//!     "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)",
//! ).unwrap();
//! assert_eq!(out, "§#FF0000A§#0000FFB");
//! # let _ = spans;
//! ```
//!
//! ## Core Concepts
//!
//! - **Palette**: the fixed 16-color table behind the `§0`-`§f` mnemonics
//! - **Token**: one scanned unit, either literal text or a format code
//! - **StyleState**: the cumulative color + flags at a point of a scan
//! - **Cascade**: the left-to-right fold producing styled spans
//! - **Normalize**: redundant-code removal over the token stream
//! - **Gradient**: `linear-gradient(...)` parsing and per-char coloring

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod palette;
pub mod rgba;
pub mod style;
pub mod token;
pub mod cascade;
pub mod normalize;
pub mod gradient;
pub mod component;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::cascade::{SpanKind, StyleSpan, resolve_spans, style_at};
    pub use crate::component::{TextComponent, TextNode};
    pub use crate::gradient::{
        FormatError, GradientStop, apply_gradient, parse_linear_gradient, sample_gradient,
    };
    pub use crate::normalize::normalize;
    pub use crate::palette::{PaletteColor, PaletteError, resolve};
    pub use crate::rgba::Rgba;
    pub use crate::style::{Attributes, StyleColor, StyleState};
    pub use crate::token::{FormatCode, MARKER, Token, TokenKind, strip_codes, tokenize};
}

// Re-export key types at crate root
pub use cascade::{StyleSpan, resolve_spans, style_at};
pub use gradient::{FormatError, apply_gradient};
pub use normalize::normalize;
pub use palette::PaletteColor;
pub use rgba::Rgba;
pub use style::{Attributes, StyleState};
pub use token::{FormatCode, strip_codes, tokenize};
