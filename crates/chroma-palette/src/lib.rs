// SPDX-License-Identifier: MIT

//! # chroma-palette — palettes from one seed color
//!
//! A seed and a [`Mood`] determine everything: the primary tonal scale,
//! named secondary hues, a neutral ramp, status accents and the semantic
//! interface roles.
//!
//! ```text
//! seed + Mood
//!     │
//!     ▼
//! generator.rs: primary → secondary → neutrals → accents → semantic
//!     │
//!     ├──▶ audit.rs:     contrast of text and accents (WCAG)
//!     └──▶ variation.rs: lighter / darker / hue-shifted recolorings
//! ```
//!
//! Generation is total over valid colors. The only failure is an invalid
//! seed string, reported by [`Palette::from_hex`].

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Loop indices become lightness steps.
#![allow(clippy::cast_precision_loss)]

pub mod audit;
pub mod generator;
pub mod mood;
pub mod scale;
pub mod variation;

pub use audit::{AuditEntry, PaletteAudit, audit_palette};
pub use generator::{
    Palette, expand_scale, generate_accents, generate_neutrals, generate_palette,
    generate_secondary, generate_semantic, lightness_curve,
};
pub use mood::Mood;
pub use scale::{Accents, NEUTRAL_SHADES, Neutrals, PRIMARY_SHADES, SEED_SHADE, Scale, Semantic};
pub use variation::{Variation, VariationSet, variations};
