// SPDX-License-Identifier: MIT
//
// Color values and the conversions between their representations.
//
// A `Color` is stored as three 8-bit sRGB channels. That is the exact,
// canonical form: hex strings map onto it one-to-one, so hex round-trips
// are bit-exact. HSL is the working space for palette math; going through
// HSL and back reproduces the original channels to within ±1 (8-bit
// quantization).
//
// Conversion pipeline:
//
//   #rrggbb ↔ sRGB 8-bit ↔ sRGB 0–1 ↔ HSL
//                          │
//                          └──→ linear sRGB (WCAG piecewise curve)
//
// Floating-point channel math happens on 0–1 normalized f64 values. The
// only place a float turns back into an 8-bit channel is `from_hsl_with`,
// which rounds half-up by default (see `Rounding`).

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ColorError;
use crate::luminance::linearize;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable 8-bit sRGB color.
///
/// Every transform returns a new `Color`; there are no setters.
///
/// # Examples
///
/// ```
/// use chroma_color::Color;
///
/// let navy = Color::from_hex("#2E5B91").unwrap();
/// assert_eq!(navy.to_hex(), "#2e5b91");
///
/// let hsl = navy.to_hsl();
/// let pale = navy.with_lightness(0.95);
/// assert!(pale.to_hsl().l > hsl.l);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit sRGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    /// Parse a `#RRGGBB` hex string (case-insensitive).
    ///
    /// Leading and trailing whitespace is trimmed first. Short forms
    /// (`#fff`), alpha forms and missing `#` are all rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] carrying the original input when
    /// the trimmed string is not `#` followed by exactly six hex digits.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s.trim()).ok_or_else(|| ColorError::InvalidFormat(s.to_string()))
    }

    /// Create a color from HSL, rounding channels half-up.
    ///
    /// Out-of-range input is normalized rather than rejected: hue wraps
    /// modulo 360, saturation and lightness are clamped to [0, 1].
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_hsl_with(hsl, Rounding::HalfUp)
    }

    /// Create a color from HSL with an explicit 8-bit quantization mode.
    #[must_use]
    pub fn from_hsl_with(hsl: Hsl, rounding: Rounding) -> Self {
        let Hsl { h, s, l } = hsl.normalized();
        let (r, g, b) = hsl_to_srgb(h, s, l);
        Self {
            r: rounding.quantize(r),
            g: rounding.quantize(g),
            b: rounding.quantize(b),
        }
    }

    // ─── Channels ────────────────────────────────────────────────────────

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// The three channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Whether all three channels are equal (a gray, black or white).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Lowercase `#rrggbb`, always seven characters.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// sRGB channels normalized to [0, 1].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (unit(self.r), unit(self.g), unit(self.b))
    }

    /// Linear-light channels, using the WCAG 2.1 linearization curve.
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (linearize(r), linearize(g), linearize(b))
    }

    /// Convert to HSL.
    ///
    /// Achromatic colors (all channels equal) report hue 0 and saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_srgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;
        let l = (max + min) / 2.0;

        if self.is_achromatic() {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            diff / (2.0 - max - min)
        } else {
            diff / (max + min)
        };

        let h = if self.r >= self.g && self.r >= self.b {
            60.0f64.mul_add((g - b) / diff, 360.0)
        } else if self.g >= self.b {
            60.0f64.mul_add((b - r) / diff, 120.0)
        } else {
            60.0f64.mul_add((r - g) / diff, 240.0)
        };

        Hsl { h: h.rem_euclid(360.0), s, l }
    }

    // ─── HSL Operations ──────────────────────────────────────────────────
    //
    // Each goes through HSL and back, so the result may differ from `self`
    // by ±1 per channel even when the adjustment is a no-op.

    /// Same hue and saturation, new absolute lightness.
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::from_hsl(Hsl { l, ..self.to_hsl() })
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(Hsl { h: hsl.h + degrees, ..hsl })
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// - `h`: hue in degrees, [0, 360), circular
/// - `s`: saturation, [0, 1]
/// - `l`: lightness, [0, 1]
///
/// Values built by hand may be out of range; [`Color::from_hsl`] normalizes
/// them on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL triple, normalized into range.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }.normalized()
    }

    /// Hue wrapped into [0, 360), saturation and lightness clamped to [0, 1].
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: self.s.clamp(0.0, 1.0),
            l: self.l.clamp(0.0, 1.0),
        }
    }
}

// ─── Rounding ────────────────────────────────────────────────────────────────

/// How a 0–1 float channel becomes an 8-bit channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// `floor(v · 255 + 0.5)`. Used for everything that ends up as hex.
    #[default]
    HalfUp,
    /// `floor(v · 255)`. Reproduces the legacy script output byte for byte.
    Truncate,
}

impl Rounding {
    /// Quantize a 0–1 channel value to 0–255.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn quantize(self, v: f64) -> u8 {
        let scaled = match self {
            Self::HalfUp => v.mul_add(255.0, 0.5),
            Self::Truncate => v * 255.0,
        };
        // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
        scaled.clamp(0.0, 255.0) as u8
    }
}

// ─── Color Lists ─────────────────────────────────────────────────────────────

/// Parse a comma-separated list of colors.
///
/// Items are trimmed and empty items skipped. Besides `#RRGGBB`, the
/// keywords `black` and `white` are accepted (case-insensitive).
///
/// # Errors
///
/// Fails on the first item that is neither a keyword nor a valid hex color.
pub fn parse_color_list(s: &str) -> Result<Vec<Color>, ColorError> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            if item.eq_ignore_ascii_case("black") {
                Ok(Color::BLACK)
            } else if item.eq_ignore_ascii_case("white") {
                Ok(Color::WHITE)
            } else {
                Color::from_hex(item)
            }
        })
        .collect()
}

// ─── Conversion Functions ────────────────────────────────────────────────────

#[inline]
fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// HSL (already normalized) → sRGB 0–1.
fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);
    let t = h / 360.0;

    (
        hue_to_channel(p, q, t + 1.0 / 3.0),
        hue_to_channel(p, q, t),
        hue_to_channel(p, q, t - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse exactly `#RRGGBB`.
fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?.as_bytes();
    if digits.len() != 6 {
        return None;
    }

    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(Color::rgb8(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some((hi << 4) | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
