// SPDX-License-Identifier: MIT
//
// bk-color color system — hex strings and HSL, the two forms a brand
// questionnaire speaks.
//
// Single-character variable names (r, g, b, h, s, l, a, k) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// Every color that enters the core arrives as a string from a color picker
// and leaves as a string bound to a style attribute. In between it lives as
// a `HexColor` (three sRGB bytes) or an `Hsl` triple:
//
//   "#2CC295" ──parse──▶ HexColor ──to_hsl──▶ Hsl ──offset──▶ Hsl ──to_hex──▶ HexColor
//
// Parsing is lenient at the edges (`parse_or_black`) because the picker
// widget already guarantees well-formed input; the strict `FromStr` path
// exists for programmatic callers that want to know what went wrong.
//
// Rounding mirrors the browser arithmetic the palettes were designed
// against: hue rounds half toward +∞ to an integer, saturation and
// lightness keep one decimal, channels round half up.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─── HexColor ────────────────────────────────────────────────────────────────

/// An opaque sRGB color, the normalized form of `#RRGGBB`.
///
/// Stored as three bytes, so two colors that differ only in the case of
/// their hex digits (or in `#RGB` vs `#RRGGBB` spelling) compare equal.
///
/// # Examples
///
/// ```
/// use bk_color::color::HexColor;
///
/// let mint = HexColor::parse("#2CC295").unwrap();
/// assert_eq!(mint.to_string(), "#2cc295");
/// assert_eq!(format!("{mint:X}"), "#2CC295");
///
/// // Malformed input silently degrades to black.
/// assert_eq!(HexColor::parse_or_black("not a color"), HexColor::BLACK);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor {
    /// Red channel, 0–255.
    pub r: u8,
    /// Green channel, 0–255.
    pub g: u8,
    /// Blue channel, 0–255.
    pub b: u8,
}

impl HexColor {
    /// Pure black, `#000000`. Also the fallback for malformed input.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`, case-insensitive, `#` optional.
    ///
    /// Returns `None` for anything else. See [`FromStr`] for the variant
    /// that reports why parsing failed.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        parse_hex(s).ok()
    }

    /// Parse like [`HexColor::parse`], coercing malformed input to black.
    #[must_use]
    pub fn parse_or_black(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::BLACK)
    }

    /// Channels normalized to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Perceived brightness with the Rec.601 weights, in 0.0–1.0.
    ///
    /// `(0.299·R + 0.587·G + 0.114·B) / 255`. This is deliberately *not*
    /// WCAG relative luminance: no gamma linearization happens here.
    #[must_use]
    pub fn luminance(self) -> f64 {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);
        0.299f64.mul_add(r, 0.587f64.mul_add(g, 0.114 * b)) / 255.0
    }

    /// Convert to HSL (hue in whole degrees, s/l as one-decimal percentages).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_srgb();
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);

        let cmax = f64::from(max) / 255.0;
        let cmin = f64::from(min) / 255.0;
        let delta = cmax - cmin;

        // Hue sector in units of 60°. `%` keeps the sign of the dividend,
        // so the red sector can go negative and wraps below.
        let sector = if max == min {
            0.0
        } else if max == self.r {
            ((g - b) / delta) % 6.0
        } else if max == self.g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let l = (cmax + cmin) / 2.0;
        let s = if max == min {
            0.0
        } else {
            delta / (1.0 - 2.0f64.mul_add(l, -1.0).abs())
        };

        Hsl {
            h: wrap_hue(round_half_up(sector * 60.0) as i32),
            s: round_tenth(s * 100.0),
            l: round_tenth(l * 100.0),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::UpperHex for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({self})")
    }
}

impl FromStr for HexColor {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<Hsl> for HexColor {
    fn from(hsl: Hsl) -> Self {
        hsl.to_hex()
    }
}

impl From<HexColor> for Hsl {
    fn from(hex: HexColor) -> Self {
        hex.to_hsl()
    }
}

// ─── Parse errors ────────────────────────────────────────────────────────────

/// Why a string is not a `#RGB` / `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    /// Nothing (or only `#`) was given.
    #[error("empty color string")]
    Empty,

    /// Wrong number of hex digits.
    #[error("expected 3 or 6 hex digits, found {0}")]
    Length(usize),

    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// - `h`: hue in whole degrees, `[0, 360)`
/// - `s`: saturation percentage, `[0, 100]`
/// - `l`: lightness percentage, `[0, 100]`
///
/// Fields are public for reading; build values with [`Hsl::new`] to get
/// the range invariants enforced.
///
/// Because hue is a whole degree, `hex → Hsl → hex` can drift by up to 3
/// per channel on strongly saturated colors (`#ff0200` comes back 2 off).
/// Grays round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: u16,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color, wrapping hue modulo 360 and clamping s/l.
    ///
    /// Out-of-range input is never rejected. NaN saturation or lightness
    /// clamps to 0.
    #[must_use]
    pub fn new(h: i32, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Convert back to sRGB using the piecewise HSL formula.
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        let h = f64::from(self.h % 360);
        let s = clamp_percent(self.s) / 100.0;
        let l = clamp_percent(self.l) / 100.0;
        let a = s * l.min(1.0 - l);

        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            let t = (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            to_u8(a.mul_add(-t, l))
        };

        HexColor::rgb(channel(0.0), channel(8.0), channel(4.0))
    }
}

// ─── Free-function API ───────────────────────────────────────────────────────
//
// The presentation layer thinks in strings, so these take and give the
// forms it binds to directly.

/// Convert a hex string to HSL. Malformed input yields `(0, 0, 0)`.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    HexColor::parse_or_black(hex).to_hsl()
}

/// Convert HSL to a hex color (rendered lowercase by `Display`).
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    hsl.to_hex()
}

/// Perceived brightness of a color in 0.0–1.0. See [`HexColor::luminance`].
#[must_use]
pub fn luminance(hex: HexColor) -> f64 {
    hex.luminance()
}

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<HexColor, ParseHexError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() {
        return Err(ParseHexError::Empty);
    }

    let mut nibbles = [0u8; 6];
    let mut len = 0;
    for ch in digits.chars() {
        if len == nibbles.len() {
            return Err(ParseHexError::Length(digits.chars().count()));
        }
        nibbles[len] = parse_hex_digit(ch).ok_or(ParseHexError::Digit(ch))?;
        len += 1;
    }

    match len {
        // #RGB — each nibble doubles (0xA → 0xAA).
        3 => Ok(HexColor::rgb(
            nibbles[0] << 4 | nibbles[0],
            nibbles[1] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[2],
        )),
        6 => Ok(HexColor::rgb(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        )),
        n => Err(ParseHexError::Length(n)),
    }
}

#[inline]
const fn parse_hex_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Round half toward +∞, the way `Math.round` does (`-0.5 → 0`).
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Keep one decimal place.
#[inline]
fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn wrap_hue(h: i32) -> u16 {
    // rem_euclid keeps the value in 0..360, which fits u16.
    h.rem_euclid(360) as u16
}

#[inline]
fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).floor().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
