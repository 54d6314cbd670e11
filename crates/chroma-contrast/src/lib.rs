// SPDX-License-Identifier: MIT
//
// chroma-contrast — WCAG 2.1 contrast evaluation.
//
// Scores foreground/background pairings and aggregates them into the
// compliance report consumed by external renderers.
//
//   Color × Color ──contrast_ratio──▶ f64 in [1, 21]
//        │
//        ▼
//   evaluate(fg, bg, FontSize?) ──▶ ContrastResult (per-level pass/fail)
//        │
//        ▼
//   build_matrix(colors, sizes) ──▶ ComplianceMatrix (ordered, keyed)
//        │
//        ├──summarize──▶ Summary
//        └──recommend──▶ Vec<Recommendation>
//
// Everything here is pure and deterministic. Matrix iteration order is
// insertion order (foreground outer, background inner, font size last) so
// "top N" views downstream are stable across runs.

// Ratio/percentage math casts small counts to f64.
#![allow(clippy::cast_precision_loss)]

pub mod contrast;
pub mod error;
pub mod font;
pub mod level;
pub mod matrix;

pub use contrast::{ContrastResult, contrast_ratio, ensure_contrast, evaluate};
pub use error::ContrastError;
pub use font::{FontSize, FontUnit};
pub use level::{Compliance, ComplianceLevel, LevelThresholds, classify};
pub use matrix::{
    ComplianceMatrix, MatrixLimits, Rating, Recommendation, Report, Summary, build_matrix,
    recommend, summarize,
};
