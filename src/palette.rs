//! The fixed 16-color legacy palette.
//!
//! Format codes address colors in two ways: by snake_case name
//! (`dark_blue`) in persisted text components, and by a single hex-digit
//! mnemonic (`§1`) inside format codes. Both resolve into the same table.
//!
//! # Examples
//!
//! ```
//! use mctext::palette::{PaletteColor, resolve};
//!
//! assert_eq!(PaletteColor::Gold.hex(), "#FFAA00");
//! assert_eq!(PaletteColor::from_mnemonic('c'), Some(PaletteColor::Red));
//! assert_eq!(resolve("aqua"), "#55FFFF");
//! // Unknown names pass through unchanged (may already be resolved hex).
//! assert_eq!(resolve("#123456"), "#123456");
//! ```

use std::fmt;

/// One of the 16 legacy palette colors, in table order.
///
/// The discriminant is the palette index, so `§a` is
/// `PaletteColor::Green` and `§f` is `PaletteColor::White`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PaletteColor {
    Black = 0,
    DarkBlue = 1,
    DarkGreen = 2,
    DarkAqua = 3,
    DarkRed = 4,
    DarkPurple = 5,
    Gold = 6,
    Gray = 7,
    DarkGray = 8,
    Blue = 9,
    Green = 10,
    Aqua = 11,
    Red = 12,
    LightPurple = 13,
    Yellow = 14,
    White = 15,
}

impl PaletteColor {
    /// All 16 colors in palette order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Position in the 16-entry table.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The single hex digit used in format codes (`0`-`f`).
    #[must_use]
    pub const fn mnemonic(self) -> char {
        match self as u8 {
            0 => '0',
            1 => '1',
            2 => '2',
            3 => '3',
            4 => '4',
            5 => '5',
            6 => '6',
            7 => '7',
            8 => '8',
            9 => '9',
            10 => 'a',
            11 => 'b',
            12 => 'c',
            13 => 'd',
            14 => 'e',
            _ => 'f',
        }
    }

    /// Snake_case identifier as stored in text-component `color` fields.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// Uppercase `#RRGGBB` value.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::DarkBlue => "#0000AA",
            Self::DarkGreen => "#00AA00",
            Self::DarkAqua => "#00AAAA",
            Self::DarkRed => "#AA0000",
            Self::DarkPurple => "#AA00AA",
            Self::Gold => "#FFAA00",
            Self::Gray => "#AAAAAA",
            Self::DarkGray => "#555555",
            Self::Blue => "#5555FF",
            Self::Green => "#55FF55",
            Self::Aqua => "#55FFFF",
            Self::Red => "#FF5555",
            Self::LightPurple => "#FF55FF",
            Self::Yellow => "#FFFF55",
            Self::White => "#FFFFFF",
        }
    }

    /// Look up by table index.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::IndexOutOfRange` for indices above 15. A
    /// caller holding a tokenized color mnemonic can never hit this; an
    /// out-of-range index means the payload was fabricated, so this path
    /// fails loudly instead of passing through.
    pub const fn from_index(index: u8) -> Result<Self, PaletteError> {
        if index < 16 {
            Ok(Self::ALL[index as usize])
        } else {
            Err(PaletteError::IndexOutOfRange(index))
        }
    }

    /// Look up by format-code mnemonic digit (`0`-`9`, `a`-`f`, lowercase).
    #[must_use]
    pub fn from_mnemonic(digit: char) -> Option<Self> {
        match digit {
            '0'..='9' | 'a'..='f' => {
                #[expect(clippy::cast_possible_truncation, reason = "hex digit is 0-15")]
                let index = digit.to_digit(16)? as u8;
                Self::from_index(index).ok()
            }
            _ => None,
        }
    }

    /// Look up by snake_case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a color identifier to its hex value.
///
/// Unknown identifiers are returned unchanged: callers routinely pass
/// already-resolved hex strings through this function, so an unmatched
/// name is not an error here.
#[must_use]
pub fn resolve(name: &str) -> &str {
    PaletteColor::from_name(name).map_or(name, |color| color.hex())
}

/// Error type for palette lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// Index outside the 16-entry table.
    IndexOutOfRange(u8),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange(index) => {
                write!(f, "palette index out of range (0-15): {index}")
            }
        }
    }
}

impl std::error::Error for PaletteError {}
