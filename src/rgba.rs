//! RGBA color algebra.
//!
//! Gradient stops originate from freeform color-picker strings, so parsing
//! here is deliberately lenient: anything unrecognizable becomes opaque
//! black rather than an error. Serialization back to hex rounds and clamps
//! channels, and omits the alpha byte for opaque colors.
//!
//! # Examples
//!
//! ```
//! use mctext::rgba::Rgba;
//!
//! let c = Rgba::parse("rgba(255, 0, 0, 0.5)");
//! assert_eq!((c.red, c.green, c.blue, c.alpha), (255, 0, 0, Some(0.5)));
//! assert_eq!(c.hex_with_alpha(), "#ff000080");
//!
//! // Malformed input falls back to opaque black.
//! assert_eq!(Rgba::parse("not a color"), Rgba::OPAQUE_BLACK);
//! ```

use lru::LruCache;
use regex::Regex;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::{LazyLock, Mutex};

/// RGBA color with integer channels and an optional alpha in 0.0-1.0.
///
/// `alpha: None` means "no alpha was ever specified" and is distinct from
/// an explicit `Some(1.0)` only when serializing with
/// [`Rgba::hex_with_alpha`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: Option<f64>,
}

impl Rgba {
    /// Opaque black, the fallback for unparseable input.
    pub const OPAQUE_BLACK: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: Some(1.0),
    };

    /// Create a color with no alpha component.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Create a color with an explicit alpha (clamped to 0.0-1.0).
    #[must_use]
    pub fn with_alpha(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(alpha.clamp(0.0, 1.0)),
        }
    }

    /// Build from raw float channels, rounding to nearest and clamping to
    /// the valid range. Interpolation math goes through here so that
    /// out-of-range picker input (`rgba(300, …)`) can never produce a
    /// malformed hex string.
    #[must_use]
    pub fn from_channels(red: f64, green: f64, blue: f64, alpha: Option<f64>) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
            alpha: alpha.map(|a| a.clamp(0.0, 1.0)),
        }
    }

    /// Parse a color string (cached).
    ///
    /// Supported formats:
    /// - Hex: `#RRGGBB`, `#RRGGBBAA`
    /// - Functional: `rgb(r, g, b)`, `rgba(r, g, b, a)` with integer
    ///   channels and a 0.0-1.0 float alpha, whitespace tolerant
    ///
    /// Anything else yields [`Rgba::OPAQUE_BLACK`]. Gradient math calls
    /// this once per stop per sample run, hence the cache.
    #[must_use]
    pub fn parse(color: &str) -> Self {
        static CACHE: LazyLock<Mutex<LruCache<String, Rgba>>> =
            LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(512).expect("non-zero"))));

        let trimmed = color.trim();

        if let Ok(mut cache) = CACHE.lock()
            && let Some(&cached) = cache.get(trimmed)
        {
            return cached;
        }

        let result = Self::parse_uncached(trimmed);

        if let Ok(mut cache) = CACHE.lock() {
            cache.put(trimmed.to_string(), result);
        }

        result
    }

    fn parse_uncached(color: &str) -> Self {
        static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+)\s*)?\)")
                .expect("valid regex")
        });

        // Hex form: #RRGGBB or #RRGGBBAA
        if let Some(hex) = color.strip_prefix('#')
            && hex.is_ascii()
            && (hex.len() == 6 || hex.len() == 8)
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            let alpha = if hex.len() == 8 {
                match u8::from_str_radix(&hex[6..8], 16) {
                    Ok(a) => f64::from(a) / 255.0,
                    Err(_) => return Self::OPAQUE_BLACK,
                }
            } else {
                1.0
            };
            return Self {
                red: r,
                green: g,
                blue: b,
                alpha: Some(alpha),
            };
        }

        // Functional form: rgb(...) / rgba(...)
        if let Some(caps) = RGBA_RE.captures(color) {
            let channel = |i: usize| -> u8 {
                caps.get(i)
                    .and_then(|m| m.as_str().parse::<u32>().ok())
                    .map_or(0, |v| clamp_channel(f64::from(v)))
            };
            let alpha = caps
                .get(4)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .map_or(1.0, |a| a.clamp(0.0, 1.0));
            return Self {
                red: channel(1),
                green: channel(2),
                blue: channel(3),
                alpha: Some(alpha),
            };
        }

        Self::OPAQUE_BLACK
    }

    /// Lowercase hex, omitting the alpha byte when the color is opaque or
    /// carries no alpha at all.
    #[must_use]
    pub fn hex(&self) -> String {
        self.format_hex(true)
    }

    /// Lowercase hex that keeps the alpha byte whenever an alpha is
    /// present, even for fully opaque colors.
    #[must_use]
    pub fn hex_with_alpha(&self) -> String {
        self.format_hex(false)
    }

    fn format_hex(&self, ignore_alpha_if_opaque: bool) -> String {
        let rgb = format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue);
        match self.alpha {
            Some(a) if !(ignore_alpha_if_opaque && (a - 1.0).abs() < f64::EPSILON) => {
                format!("{rgb}{:02x}", clamp_channel(a * 255.0))
            }
            _ => rgb,
        }
    }
}

impl FromStr for Rgba {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// Round to nearest and clamp to a valid channel byte.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to 0.0-255.0 before the cast"
)]
pub fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
