// SPDX-License-Identifier: MIT

//! WCAG contrast ratio and single-pair evaluation.
//!
//! The ratio is computed in sRGB relative-luminance space (the WCAG
//! definition). When a color has to be corrected, the adjustment happens in
//! HSL lightness so the hue and saturation survive.

use chroma_color::{Color, Hsl, relative_luminance};
use serde::{Serialize, Serializer};

use crate::font::FontSize;
use crate::level::{Compliance, ComplianceLevel};

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order, and exactly
/// 1.0 for identical colors.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// The evaluation of one foreground/background/size triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub foreground: Color,
    pub background: Color,
    /// Exact ratio. Compliance is judged on this value; documents carry
    /// [`ContrastResult::rounded_ratio`].
    #[serde(serialize_with = "serialize_rounded")]
    pub ratio: f64,
    pub font_size: Option<FontSize>,
    pub is_large_text: bool,
    pub compliance: Compliance,
    pub overall_compliant: bool,
}

impl ContrastResult {
    /// Stable composite key, e.g. `#2e5b91_on_#ffffff_16px`.
    ///
    /// Without a font size the trailing size segment is omitted.
    #[must_use]
    pub fn key(&self) -> String {
        match self.font_size {
            Some(size) => format!("{}_on_{}_{size}", self.foreground, self.background),
            None => format!("{}_on_{}", self.foreground, self.background),
        }
    }

    /// Ratio rounded to two decimals, as shown in reports.
    #[must_use]
    pub fn rounded_ratio(&self) -> f64 {
        round_ratio(self.ratio)
    }

    /// Whether a specific level passes.
    #[must_use]
    pub const fn passes(&self, level: ComplianceLevel) -> bool {
        self.compliance.get(level)
    }

    /// Highest passing level.
    #[must_use]
    pub fn level(&self) -> Option<ComplianceLevel> {
        self.compliance.highest()
    }

    /// `"AAA"`, `"AA"`, `"A"` or `"fail"`.
    #[must_use]
    pub fn badge(&self) -> &'static str {
        self.level().map_or("fail", ComplianceLevel::name)
    }
}

fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

fn serialize_rounded<S: Serializer>(ratio: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_ratio(*ratio))
}

/// Evaluate one pairing.
///
/// A missing `font_size` is treated as small text, which applies the
/// stricter thresholds.
#[must_use]
pub fn evaluate(fg: Color, bg: Color, font_size: Option<FontSize>) -> ContrastResult {
    let ratio = contrast_ratio(fg, bg);
    evaluate_with_ratio(fg, bg, ratio, font_size)
}

/// Evaluate with a ratio computed by the caller (the matrix reuses one
/// ratio across every font size of a pair).
pub(crate) fn evaluate_with_ratio(
    fg: Color,
    bg: Color,
    ratio: f64,
    font_size: Option<FontSize>,
) -> ContrastResult {
    let is_large_text = font_size.is_some_and(FontSize::is_large_text);
    let compliance = Compliance::check(ratio, is_large_text);
    ContrastResult {
        foreground: fg,
        background: bg,
        ratio,
        font_size,
        is_large_text,
        compliance,
        overall_compliant: compliance.all(),
    }
}

/// Adjust a foreground color's HSL lightness until it meets `min_ratio`
/// contrast against `bg`.
///
/// Both directions are searched (darker and lighter); the feasible
/// candidate closest to the original lightness wins. Hue and saturation are
/// kept. If neither direction can reach `min_ratio`, whichever of black and
/// white contrasts more with `bg` is returned.
#[must_use]
pub fn ensure_contrast(fg: Color, bg: Color, min_ratio: f64) -> Color {
    // Already readable?
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }

    let hsl = fg.to_hsl();
    let darker = search_lightness(hsl, bg, min_ratio, false);
    let lighter = search_lightness(hsl, bg, min_ratio, true);

    match (darker, lighter) {
        (Some((d, dl)), Some((l, ll))) => {
            if (hsl.l - dl).abs() <= (ll - hsl.l).abs() { d } else { l }
        }
        (Some((c, _)), None) | (None, Some((c, _))) => c,
        (None, None) => {
            if contrast_ratio(Color::BLACK, bg) >= contrast_ratio(Color::WHITE, bg) {
                Color::BLACK
            } else {
                Color::WHITE
            }
        }
    }
}

/// Binary search on HSL lightness in one direction.
///
/// Returns the passing candidate nearest to `hsl.l` and its lightness, or
/// `None` when even the extreme (black or white) fails.
fn search_lightness(hsl: Hsl, bg: Color, min_ratio: f64, lighten: bool) -> Option<(Color, f64)> {
    let extreme = if lighten { 1.0 } else { 0.0 };
    let at = |l: f64| Color::from_hsl(Hsl { l, ..hsl });

    if contrast_ratio(at(extreme), bg) < min_ratio {
        return None;
    }

    // `pass` always meets the ratio, `fail` never does.
    let (mut pass, mut fail) = (extreme, hsl.l);
    let mut best = (at(extreme), extreme);
    for _ in 0..24 {
        let mid = (pass + fail) * 0.5;
        let candidate = at(mid);
        if contrast_ratio(candidate, bg) >= min_ratio {
            best = (candidate, mid);
            pass = mid;
        } else {
            fail = mid;
        }
    }

    Some(best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
