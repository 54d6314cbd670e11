// SPDX-License-Identifier: MIT

//! WCAG 2.1 relative luminance.
//!
//! This is the fixed formula from the guideline, not a tunable model:
//!
//! ```text
//! c' = c / 12.92                      if c <= 0.03928
//! c' = ((c + 0.055) / 1.055) ^ 2.4    otherwise
//! L  = 0.2126 r' + 0.7152 g' + 0.0722 b'
//! ```
//!
//! The 0.03928 breakpoint is the one WCAG 2.1 publishes. It differs from
//! the IEC sRGB value (0.04045) but no 8-bit channel falls between the two,
//! so results are identical for every [`Color`].

use crate::color::Color;

/// Channel value at which the linearization curve switches from linear to
/// power-law.
pub const LINEARIZE_THRESHOLD: f64 = 0.039_28;

/// Convert a single sRGB channel (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn linearize(c: f64) -> f64 {
    if c <= LINEARIZE_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_linear();
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
