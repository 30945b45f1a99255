//! Active style state for the format-code cascade.
//!
//! A left-to-right scan over a string carries one [`StyleState`]: a single
//! active color plus independently toggleable attribute flags. Color codes
//! replace the color and clear every flag; style codes toggle one flag on;
//! reset clears everything. The state is owned by one forward pass and is
//! never shared across scans.

use bitflags::bitflags;
use std::fmt;

use crate::palette::PaletteColor;
use crate::token::FormatCode;

bitflags! {
    /// Toggleable style flags, one per style mnemonic.
    ///
    /// Flags only accumulate; nothing but a color or reset code clears
    /// them. The original scheme reserves a seventh "color" letter as a
    /// category tag, but it toggles nothing and is not a flag here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Scrambled glyphs (`§k`).
        const OBFUSCATED    = 1 << 0;
        /// Bold text (`§l`).
        const BOLD          = 1 << 1;
        /// Strikethrough text (`§m`).
        const STRIKETHROUGH = 1 << 2;
        /// Underlined text (`§n`).
        const UNDERLINE     = 1 << 3;
        /// Italic text (`§o`).
        const ITALIC        = 1 << 4;
    }
}

impl Attributes {
    /// Map of flags to their format-code mnemonics, in code order.
    pub const MNEMONICS: [(Self, char); 5] = [
        (Self::OBFUSCATED, 'k'),
        (Self::BOLD, 'l'),
        (Self::STRIKETHROUGH, 'm'),
        (Self::UNDERLINE, 'n'),
        (Self::ITALIC, 'o'),
    ];

    /// Look up a single flag by its mnemonic letter (lowercase only).
    #[must_use]
    pub fn from_mnemonic(letter: char) -> Option<Self> {
        Self::MNEMONICS
            .iter()
            .find(|(_, m)| *m == letter)
            .map(|(flag, _)| *flag)
    }

    /// Get the mnemonic letters for enabled flags.
    #[must_use]
    pub fn to_mnemonics(&self) -> Vec<char> {
        Self::MNEMONICS
            .iter()
            .filter_map(|(flag, m)| if self.contains(*flag) { Some(*m) } else { None })
            .collect()
    }
}

/// The active color of a style state.
///
/// A hex literal keeps its six digits exactly as written so the two forms
/// stay textually distinct even when they denote the same RGB value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleColor {
    /// One of the 16 palette colors.
    Palette(PaletteColor),
    /// Literal RGB, six hex digits without the leading `#`.
    Hex(String),
}

impl StyleColor {
    /// CSS-usable `#RRGGBB` value.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Palette(color) => color.hex().to_string(),
            Self::Hex(digits) => format!("#{digits}"),
        }
    }
}

impl fmt::Display for StyleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(color) => write!(f, "{}", color.name()),
            Self::Hex(digits) => write!(f, "#{digits}"),
        }
    }
}

/// Cumulative color and flags in effect at a point of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleState {
    /// Active color, if any code has set one.
    pub color: Option<StyleColor>,
    /// Active flags.
    pub attributes: Attributes,
}

impl StyleState {
    /// Fresh state with no color and no flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no color and no flags are active.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.attributes.is_empty()
    }

    /// Consume one format code, mutating the state in place.
    pub fn apply(&mut self, code: &FormatCode) {
        match code {
            // Any color code also cancels accumulated flags.
            FormatCode::Color(color) => {
                self.color = Some(StyleColor::Palette(*color));
                self.attributes = Attributes::empty();
            }
            FormatCode::Hex(digits) => {
                self.color = Some(StyleColor::Hex(digits.clone()));
                self.attributes = Attributes::empty();
            }
            FormatCode::Style(flag) => {
                self.attributes.insert(*flag);
            }
            FormatCode::Reset => {
                self.color = None;
                self.attributes = Attributes::empty();
            }
        }
    }

    #[must_use]
    pub fn bold(&self) -> bool {
        self.attributes.contains(Attributes::BOLD)
    }

    #[must_use]
    pub fn italic(&self) -> bool {
        self.attributes.contains(Attributes::ITALIC)
    }

    #[must_use]
    pub fn underlined(&self) -> bool {
        self.attributes.contains(Attributes::UNDERLINE)
    }

    #[must_use]
    pub fn strikethrough(&self) -> bool {
        self.attributes.contains(Attributes::STRIKETHROUGH)
    }

    #[must_use]
    pub fn obfuscated(&self) -> bool {
        self.attributes.contains(Attributes::OBFUSCATED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic_round_trip() {
        for (flag, letter) in Attributes::MNEMONICS {
            assert_eq!(Attributes::from_mnemonic(letter), Some(flag));
            assert_eq!(flag.to_mnemonics(), vec![letter]);
        }
    }

    #[test]
    fn test_from_mnemonic_rejects_non_style_letters() {
        assert_eq!(Attributes::from_mnemonic('r'), None);
        assert_eq!(Attributes::from_mnemonic('c'), None);
        assert_eq!(Attributes::from_mnemonic('L'), None);
    }

    #[test]
    fn test_to_mnemonics_multiple() {
        let attrs = Attributes::BOLD | Attributes::ITALIC;
        assert_eq!(attrs.to_mnemonics(), vec!['l', 'o']);
    }

    #[test]
    fn test_style_flags_accumulate() {
        let mut state = StyleState::new();
        state.apply(&FormatCode::Style(Attributes::BOLD));
        state.apply(&FormatCode::Style(Attributes::ITALIC));
        assert!(state.bold());
        assert!(state.italic());
        assert!(!state.underlined());
    }

    #[test]
    fn test_color_clears_flags() {
        let mut state = StyleState::new();
        state.apply(&FormatCode::Style(Attributes::BOLD));
        state.apply(&FormatCode::Color(PaletteColor::Red));
        assert!(!state.bold());
        assert_eq!(state.color, Some(StyleColor::Palette(PaletteColor::Red)));
    }

    #[test]
    fn test_hex_clears_flags() {
        let mut state = StyleState::new();
        state.apply(&FormatCode::Style(Attributes::UNDERLINE));
        state.apply(&FormatCode::Hex("FF0000".to_string()));
        assert!(state.attributes.is_empty());
        assert_eq!(state.color, Some(StyleColor::Hex("FF0000".to_string())));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = StyleState::new();
        state.apply(&FormatCode::Color(PaletteColor::Gold));
        state.apply(&FormatCode::Style(Attributes::BOLD));
        state.apply(&FormatCode::Reset);
        assert!(state.is_plain());
    }

    #[test]
    fn test_style_color_css() {
        assert_eq!(StyleColor::Palette(PaletteColor::Aqua).css(), "#55FFFF");
        assert_eq!(StyleColor::Hex("aB12cD".to_string()).css(), "#aB12cD");
    }

    #[test]
    fn test_hex_and_palette_stay_distinct() {
        // Same RGB value, different textual form.
        let named = StyleColor::Palette(PaletteColor::Red);
        let literal = StyleColor::Hex("FF5555".to_string());
        assert_ne!(named, literal);
    }
}
