// SPDX-License-Identifier: MIT

//! Palette moods — named presets for the generation curves.
//!
//! | Mood           | Primary curve | Secondary          | Neutrals        | Accents          |
//! |----------------|---------------|--------------------|-----------------|------------------|
//! | `neutral`      | conservative  | none               | achromatic      | seed-relative    |
//! | `professional` | conservative  | blue, gray         | achromatic      | fixed canonical  |
//! | `creative`     | conservative  | purple, teal       | achromatic      | seed-relative    |
//! | `energetic`    | wide          | orange, lime       | achromatic      | seed-relative    |
//! | `warm`         | conservative  | none               | hue 40°, s 0.05 | seed-relative    |
//! | `cool`         | conservative  | none               | hue 220°, s 0.05| seed-relative    |
//!
//! `vibrant` is accepted as another name for `energetic`.

use std::fmt;

use serde::Serialize;

/// A palette mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Neutral,
    Professional,
    Creative,
    Energetic,
    Warm,
    Cool,
}

impl Mood {
    /// Every mood, in table order.
    pub const ALL: [Self; 6] = [
        Self::Neutral,
        Self::Professional,
        Self::Creative,
        Self::Energetic,
        Self::Warm,
        Self::Cool,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Professional => "professional",
            Self::Creative => "creative",
            Self::Energetic => "energetic",
            Self::Warm => "warm",
            Self::Cool => "cool",
        }
    }

    /// Parse a mood by name (case-insensitive, surrounding whitespace
    /// ignored). Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        if lower == "vibrant" {
            return Some(Self::Energetic);
        }
        Self::ALL.into_iter().find(|m| m.name() == lower)
    }

    /// Parse a mood token, falling back to [`Mood::Neutral`] for anything
    /// unrecognized. Never fails.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        Self::from_name(token).unwrap_or_default()
    }

    /// Whether the primary scale uses the wide lightness curve.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Energetic)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
