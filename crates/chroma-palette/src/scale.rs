// SPDX-License-Identifier: MIT

//! Typed palette scales.
//!
//! Every scale keeps its entries in generation order and serializes as a
//! JSON object in that order, so the same seed always renders the same
//! document.

use chroma_color::Color;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Shade keys of the primary scale, lightest first.
pub const PRIMARY_SHADES: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// Shade key the seed color is pinned to.
pub const SEED_SHADE: &str = "500";

/// Shade keys of the neutral ramp, lightest first.
pub const NEUTRAL_SHADES: [&str; 19] = [
    "50", "100", "150", "200", "250", "300", "350", "400", "450", "500", "550", "600", "650",
    "700", "750", "800", "850", "900", "950",
];

// ─── Scale ───────────────────────────────────────────────────────────────────

/// An ordered mapping from shade or color name to [`Color`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Scale {
    entries: IndexMap<&'static str, Color>,
}

impl Scale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `color`. An existing key keeps its position.
    pub fn insert(&mut self, key: &'static str, color: Color) {
        self.entries.insert(key, color);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Color> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        self.entries.iter().map(|(&k, &c)| (k, c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<(&'static str, Color)> for Scale {
    fn from_iter<I: IntoIterator<Item = (&'static str, Color)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

// ─── Neutrals ────────────────────────────────────────────────────────────────

/// The 19-step neutral ramp, `"50"` through `"950"`.
///
/// Only [`generate_neutrals`](crate::generate_neutrals) builds one, so every
/// shade is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neutrals {
    colors: [Color; 19],
}

impl Neutrals {
    pub(crate) const fn new(colors: [Color; 19]) -> Self {
        Self { colors }
    }

    /// Look up a shade by key.
    #[must_use]
    pub fn get(&self, shade: &str) -> Option<Color> {
        NEUTRAL_SHADES
            .iter()
            .position(|&k| k == shade)
            .map(|i| self.colors[i])
    }

    /// Shade by number. `shade` must be one of 50, 100, …, 950.
    const fn at(&self, shade: usize) -> Color {
        self.colors[shade / 50 - 1]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        NEUTRAL_SHADES.into_iter().zip(self.colors)
    }
}

impl Serialize for Neutrals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.iter().collect::<IndexMap<_, _>>().serialize(serializer)
    }
}

// ─── Accents ─────────────────────────────────────────────────────────────────

/// Call-to-action and status colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accents {
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Accents {
    /// `(name, color)` pairs in declaration order.
    #[must_use]
    pub const fn named(&self) -> [(&'static str, Color); 3] {
        [
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
        ]
    }
}

// ─── Semantic ────────────────────────────────────────────────────────────────

/// Interface roles, each a reference into the neutral ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Semantic {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub border: Color,
    pub divider: Color,
}

impl Semantic {
    /// Project the semantic roles out of a finished neutral ramp.
    ///
    /// | Role             | Shade |
    /// |------------------|-------|
    /// | `background`     | 50    |
    /// | `surface`        | 100   |
    /// | `text-primary`   | 900   |
    /// | `text-secondary` | 600   |
    /// | `text-disabled`  | 400   |
    /// | `border`         | 200   |
    /// | `divider`        | 100   |
    #[must_use]
    pub const fn from_neutrals(neutrals: &Neutrals) -> Self {
        Self {
            background: neutrals.at(50),
            surface: neutrals.at(100),
            text_primary: neutrals.at(900),
            text_secondary: neutrals.at(600),
            text_disabled: neutrals.at(400),
            border: neutrals.at(200),
            divider: neutrals.at(100),
        }
    }
}
