// SPDX-License-Identifier: MIT

//! Palette generation from a single seed color.
//!
//! ```text
//! seed + Mood
//!   ├─ expand_scale       → primary   (10 shades, seed pinned at "500")
//!   ├─ generate_secondary → secondary (0 or 2 named hues)
//!   ├─ generate_neutrals  → neutrals  (19-step ramp, mood tint)
//!   ├─ generate_accents   → accents   (success / warning / error)
//!   └─ generate_semantic  → semantic  (projection of neutrals)
//! ```
//!
//! Everything runs in HSL. Hue and saturation come from the seed unless a
//! mood overrides them; only lightness follows the curves below.

use chroma_color::{Color, ColorError, Hsl};
use serde::Serialize;
use tracing::debug;

use crate::mood::Mood;
use crate::scale::{Accents, Neutrals, PRIMARY_SHADES, SEED_SHADE, Scale, Semantic};

/// Primary lightness targets for the wide (energetic) curve, one per shade.
const WIDE_CURVE: [f64; 10] = [0.95, 0.85, 0.70, 0.55, 0.45, 0.40, 0.35, 0.25, 0.15, 0.05];

/// Primary lightness targets for every other mood.
const CONSERVATIVE_CURVE: [f64; 10] = [0.98, 0.90, 0.75, 0.60, 0.50, 0.45, 0.40, 0.30, 0.20, 0.10];

/// Saturation shared by the seed-relative accents.
const ACCENT_SATURATION: f64 = 0.8;

// ─── Palette ─────────────────────────────────────────────────────────────────

/// A complete palette. Serializes with the scales in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Scale,
    pub secondary: Scale,
    pub neutrals: Neutrals,
    pub accents: Accents,
    pub semantic: Semantic,
}

impl Palette {
    /// Parse `seed` and generate.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] when `seed` is not `#RRGGBB`.
    pub fn from_hex(seed: &str, mood: Mood) -> Result<Self, ColorError> {
        Ok(generate_palette(Color::from_hex(seed)?, mood))
    }

    /// The seed color (always the primary `"500"` shade).
    #[must_use]
    pub fn seed(&self) -> Option<Color> {
        self.primary.get(SEED_SHADE)
    }
}

/// Run the five generators in order: primary, secondary, neutrals, accents,
/// then semantic (which reads the finished neutrals).
#[must_use]
pub fn generate_palette(seed: Color, mood: Mood) -> Palette {
    debug!(%seed, %mood, "generating palette");

    let primary = expand_scale(seed, mood);
    let secondary = generate_secondary(seed, mood);
    let neutrals = generate_neutrals(mood);
    let accents = generate_accents(seed, mood);
    let semantic = generate_semantic(&neutrals);

    Palette {
        primary,
        secondary,
        neutrals,
        accents,
        semantic,
    }
}

// ─── Generators ──────────────────────────────────────────────────────────────

/// Lightness target for each primary shade. The `"500"` slot is nominal:
/// [`expand_scale`] pins the seed there instead.
#[must_use]
pub const fn lightness_curve(mood: Mood) -> [f64; 10] {
    if mood.is_wide() { WIDE_CURVE } else { CONSERVATIVE_CURVE }
}

/// Ten primary shades, `"50"` (lightest) through `"900"` (darkest).
///
/// The seed's hue and saturation are held; lightness follows the mood's
/// curve. Shade `"500"` is the seed itself, bit for bit.
#[must_use]
pub fn expand_scale(seed: Color, mood: Mood) -> Scale {
    let hsl = seed.to_hsl();
    PRIMARY_SHADES
        .into_iter()
        .zip(lightness_curve(mood))
        .map(|(shade, l)| {
            let color = if shade == SEED_SHADE {
                seed
            } else {
                Color::from_hsl(Hsl { l, ..hsl })
            };
            (shade, color)
        })
        .collect()
}

/// Named secondary colors for moods that have them.
///
/// Hues are absolute (a "blue" is blue whatever the seed); saturation and
/// lightness come from the seed. Moods without a secondary set return an
/// empty scale.
#[must_use]
pub fn generate_secondary(seed: Color, mood: Mood) -> Scale {
    let hsl = seed.to_hsl();
    let hue = |h: f64| Color::from_hsl(Hsl { h, ..hsl });

    match mood {
        Mood::Professional => [
            ("blue", hue(220.0)),
            ("gray", Color::from_hsl(Hsl { h: 0.0, s: 0.1, ..hsl })),
        ]
        .into_iter()
        .collect(),
        Mood::Creative => [("purple", hue(270.0)), ("teal", hue(180.0))].into_iter().collect(),
        Mood::Energetic => [("orange", hue(30.0)), ("lime", hue(90.0))].into_iter().collect(),
        Mood::Neutral | Mood::Warm | Mood::Cool => Scale::new(),
    }
}

/// Nineteen evenly spaced neutrals, `"50"` = lightness 1.0 down to
/// `"950"` ≈ 0.05.
///
/// Warm moods tint toward 40°, cool toward 220° (both at saturation 0.05);
/// every other mood is pure gray. The seed does not participate.
#[must_use]
pub fn generate_neutrals(mood: Mood) -> Neutrals {
    let (h, s) = match mood {
        Mood::Warm => (40.0, 0.05),
        Mood::Cool => (220.0, 0.05),
        _ => (0.0, 0.0),
    };

    let mut colors = [Color::BLACK; 19];
    for (i, color) in colors.iter_mut().enumerate() {
        // shade = 50·(i+1), lightness = 1 − (shade − 50) / 950
        let l = 1.0 - (i as f64 * 50.0) / 950.0;
        *color = Color::from_hsl(Hsl { h, s, l });
    }
    Neutrals::new(colors)
}

/// Success, warning and error colors.
///
/// The professional mood uses fixed canonical hues. Other moods rotate the
/// seed hue (+120° success, +60° warning, +0° error) at saturation 0.8,
/// keeping the seed's lightness.
#[must_use]
pub fn generate_accents(seed: Color, mood: Mood) -> Accents {
    if mood == Mood::Professional {
        return Accents {
            success: Color::from_hsl(Hsl::new(120.0, 0.7, 0.5)),
            warning: Color::from_hsl(Hsl::new(45.0, 0.8, 0.6)),
            error: Color::from_hsl(Hsl::new(0.0, 0.8, 0.6)),
        };
    }

    let Hsl { h, l, .. } = seed.to_hsl();
    let accent = |offset: f64| Color::from_hsl(Hsl::new(h + offset, ACCENT_SATURATION, l));
    Accents {
        success: accent(120.0),
        warning: accent(60.0),
        error: accent(0.0),
    }
}

/// Semantic interface roles, projected from finished neutrals.
///
/// Taking [`Neutrals`] rather than a seed makes the ordering explicit:
/// there is no way to call this before the ramp exists.
#[must_use]
pub const fn generate_semantic(neutrals: &Neutrals) -> Semantic {
    Semantic::from_neutrals(neutrals)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
