// SPDX-License-Identifier: MIT

//! Recoloring variations for a fixed set of brand colors (logo variants).
//!
//! Set 0 is lighter, set 1 darker, every later set rotates the hue a
//! further 30°.

use chroma_color::{Color, Hsl};
use serde::Serialize;

/// Degrees added per hue-shifted set.
pub const HUE_STEP: f64 = 30.0;

/// How one variation set transforms each color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "degrees", rename_all = "snake_case")]
pub enum Variation {
    /// Saturation × 0.8, lightness × 1.2 (capped at 1).
    Lighter,
    /// Saturation × 1.2 (capped at 1), lightness × 0.8.
    Darker,
    /// Hue rotated by the given number of degrees.
    HueShift(f64),
}

impl Variation {
    /// The variation used for set number `index`.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => Self::Lighter,
            1 => Self::Darker,
            n => Self::HueShift(HUE_STEP * (n - 1) as f64),
        }
    }

    #[must_use]
    pub fn apply(self, color: Color) -> Color {
        let Hsl { h, s, l } = color.to_hsl();
        match self {
            Self::Lighter => Color::from_hsl(Hsl::new(h, s * 0.8, (l * 1.2).min(1.0))),
            Self::Darker => Color::from_hsl(Hsl::new(h, (s * 1.2).min(1.0), l * 0.8)),
            Self::HueShift(degrees) => color.shift_hue(degrees),
        }
    }
}

/// One recolored set, colors in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariationSet {
    pub variation: Variation,
    pub colors: Vec<Color>,
}

/// Produce `count` variation sets of `colors`.
#[must_use]
pub fn variations(colors: &[Color], count: usize) -> Vec<VariationSet> {
    (0..count)
        .map(|i| {
            let variation = Variation::for_index(i);
            VariationSet {
                variation,
                colors: colors.iter().map(|&c| variation.apply(c)).collect(),
            }
        })
        .collect()
}
