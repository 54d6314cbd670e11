// SPDX-License-Identifier: MIT
//
// chroma-color — the value layer of the chroma engine.
//
// Every other crate in the workspace speaks in terms of the `Color` defined
// here: an immutable 8-bit sRGB triple that converts losslessly to and from
// `#rrggbb` hex, and (to within 8-bit rounding) to and from HSL. The WCAG
// relative luminance lives here too, because it is a property of a single
// color rather than of a pairing.
//
//   "#2E5B91" ──from_hex──▶ Color ──to_hsl──▶ Hsl ──(adjust)──▶ Hsl ──from_hsl──▶ Color
//                             │
//                             └──relative_luminance──▶ f64 in [0, 1]

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod error;
pub mod luminance;

pub use color::{Color, Hsl, Rounding, parse_color_list};
pub use error::ColorError;
pub use luminance::relative_luminance;
