//! Gradient parsing, sampling, and per-character application.
//!
//! A gradient arrives as a CSS `linear-gradient(...)` description from a
//! color picker. Parsing the wrapper is strict (a non-gradient string is
//! a hard error), but the stops inside stay lenient: angle and direction
//! tokens are discarded, missing positions are inferred from stop order,
//! and unparseable stop colors fall back to opaque black via
//! [`Rgba::parse`].
//!
//! # Examples
//!
//! ```
//! use mctext::gradient::apply_gradient;
//!
//! let out = apply_gradient(
//!     "AB",
//!     "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)",
//! ).unwrap();
//! assert_eq!(out, "§#FF0000A§#0000FFB");
//! ```

use regex::Regex;
use smallvec::SmallVec;
use std::fmt;
use std::sync::LazyLock;

use crate::rgba::Rgba;
use crate::token::MARKER;

/// One gradient stop: a color at a position along the 0.0-1.0 axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub color: Rgba,
}

/// Stop list, inline for the 2-4 stops typical pickers emit.
pub type StopList = SmallVec<[GradientStop; 4]>;

/// Hard failures of the gradient engine.
///
/// Stop colors degrade to opaque black instead of erroring; only a
/// malformed wrapper or an empty stop list is unrecoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The description is not a `linear-gradient(...)` expression.
    InvalidGradient(String),
    /// The argument list contained no color stops at all.
    NoStops,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGradient(input) => {
                write!(f, "invalid linear-gradient expression: {input:?}")
            }
            Self::NoStops => write!(f, "gradient has no color stops"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Parse a `linear-gradient(...)` description into a stop list.
///
/// The argument list splits on top-level commas only, so commas inside
/// `rgba(...)` stop colors never split a stop. Angle (`90deg`, `1rad`)
/// and direction (`to right`) tokens are dropped. A stop may carry a
/// trailing position (`50%` or a bare fraction); stops without one are
/// spread evenly over the remaining axis by parse order, first at 0 and
/// last at 1.
///
/// # Errors
///
/// [`FormatError::InvalidGradient`] when the wrapper does not match,
/// [`FormatError::NoStops`] when nothing but angle tokens remains.
pub fn parse_linear_gradient(description: &str) -> Result<StopList, FormatError> {
    static WRAPPER_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"linear-gradient\((.*)\)").expect("valid regex"));
    static POSITION_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[\d.]+%?$").expect("valid regex"));

    let lowered = description.to_lowercase();
    let params = WRAPPER_RE
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| FormatError::InvalidGradient(description.to_string()))?
        .as_str();

    let color_parts: Vec<&str> = split_top_level(params)
        .into_iter()
        .map(str::trim)
        .filter(|part| {
            !(part.contains("deg") || part.contains("rad") || part.starts_with("to "))
        })
        .collect();

    if color_parts.is_empty() {
        return Err(FormatError::NoStops);
    }

    let mut stops = StopList::new();
    for (index, part) in color_parts.iter().enumerate() {
        let (color, explicit) = match part.rsplit_once(' ') {
            Some((head, tail)) if POSITION_RE.is_match(tail.trim()) => {
                match parse_position(tail.trim()) {
                    Some(position) => (head.trim(), Some(position)),
                    None => (*part, None),
                }
            }
            _ => (*part, None),
        };

        let position = explicit.unwrap_or_else(|| infer_position(index, color_parts.len()));
        stops.push(GradientStop {
            position,
            color: Rgba::parse(color),
        });
    }

    log::debug!("parsed gradient {description:?} into {} stop(s)", stops.len());

    Ok(stops)
}

/// `"50%"` -> 0.5, `"0.5"` -> 0.5.
fn parse_position(token: &str) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok().map(|p| p / 100.0),
        None => token.parse::<f64>().ok(),
    }
}

/// Even spread for stops without an explicit position.
#[expect(clippy::cast_precision_loss, reason = "stop counts are tiny")]
fn infer_position(index: usize, count: usize) -> f64 {
    if index == 0 {
        0.0
    } else if index == count - 1 {
        1.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

/// Split on commas outside any parentheses.
fn split_top_level(params: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, byte) in params.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&params[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&params[start..]);
    parts
}

/// Interpolate `count` evenly spaced samples across the stops.
///
/// Stops are sorted by position first. Sample `i` sits at ratio
/// `i / (count - 1)` (0 when `count` is 1); the bracketing stop pair
/// defaults to the endpoint stops when the ratio falls outside every
/// segment, and the within-segment ratio is clamped to 0.0-1.0, so
/// out-of-range stop positions can never extrapolate. Coincident stop
/// positions resolve to the left stop. `ignore_alpha` forces every
/// sample opaque.
///
/// # Errors
///
/// [`FormatError::NoStops`] when `stops` is empty.
pub fn sample_gradient(
    stops: &[GradientStop],
    count: usize,
    ignore_alpha: bool,
) -> Result<Vec<Rgba>, FormatError> {
    if stops.is_empty() {
        return Err(FormatError::NoStops);
    }

    let mut sorted: StopList = SmallVec::from_slice(stops);
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        #[expect(clippy::cast_precision_loss, reason = "sample counts are text lengths")]
        let ratio = if count > 1 {
            i as f64 / (count - 1) as f64
        } else {
            0.0
        };

        let mut left = sorted[0];
        let mut right = sorted[sorted.len() - 1];
        for pair in sorted.windows(2) {
            if ratio >= pair[0].position && ratio <= pair[1].position {
                left = pair[0];
                right = pair[1];
                break;
            }
        }

        let width = right.position - left.position;
        let t = if width.abs() < f64::EPSILON {
            0.0
        } else {
            ((ratio - left.position) / width).clamp(0.0, 1.0)
        };

        let alpha = if ignore_alpha {
            Some(1.0)
        } else {
            let left_a = left.color.alpha.unwrap_or(1.0);
            let right_a = right.color.alpha.unwrap_or(1.0);
            Some(left_a + (right_a - left_a) * t)
        };

        samples.push(Rgba::from_channels(
            lerp(left.color.red, right.color.red, t),
            lerp(left.color.green, right.color.green, t),
            lerp(left.color.blue, right.color.blue, t),
            alpha,
        ));
    }

    Ok(samples)
}

fn lerp(left: u8, right: u8, t: f64) -> f64 {
    f64::from(left) + (f64::from(right) - f64::from(left)) * t
}

/// Color every non-whitespace character of `text` along the gradient.
///
/// Whitespace passes through uncolored and does not consume a sample.
/// Every other character is prefixed with an uppercase hex format code,
/// so the output contains exactly one code per non-whitespace character.
/// Whitespace-only input produces an empty string.
///
/// # Errors
///
/// Propagates wrapper and empty-stop failures from
/// [`parse_linear_gradient`].
pub fn apply_gradient(text: &str, description: &str) -> Result<String, FormatError> {
    let count = text.chars().filter(|c| !c.is_whitespace()).count();
    if count == 0 {
        return Ok(String::new());
    }

    let stops = parse_linear_gradient(description)?;
    let colors = sample_gradient(&stops, count, true)?;

    log::debug!("applying {count}-sample gradient to {} byte(s) of text", text.len());

    let mut out = String::with_capacity(text.len() + count * 8);
    let mut next = colors.iter();
    for ch in text.chars() {
        if ch.is_whitespace() {
            out.push(ch);
        } else if let Some(color) = next.next() {
            out.push(MARKER);
            out.push_str(&color.hex().to_ascii_uppercase());
            out.push(ch);
        }
    }

    Ok(out)
}
