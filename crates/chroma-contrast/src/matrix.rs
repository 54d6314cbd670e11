// SPDX-License-Identifier: MIT

//! Compliance matrices — every ordered color pair at every font size.
//!
//! For N colors and M sizes the matrix holds N·(N−1)·M results: self-pairs
//! are skipped because a color against itself is always 1:1 and says
//! nothing. Results are kept in insertion order (foreground outer loop,
//! background inner loop, sizes innermost) and keyed by
//! [`ContrastResult::key`], so the same input always yields the same
//! document, byte for byte.

use std::collections::BTreeMap;

use chroma_color::Color;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::{debug, trace};

use crate::contrast::{ContrastResult, contrast_ratio, ensure_contrast, evaluate_with_ratio};
use crate::error::ContrastError;
use crate::font::FontSize;
use crate::level::{ComplianceLevel, LevelThresholds};

/// Default ceiling on evaluations per matrix.
pub const DEFAULT_MAX_EVALUATIONS: usize = 100_000;

/// Below this ratio a pairing is a critical problem at any size.
pub const CRITICAL_RATIO: f64 = 3.0;

/// Below this ratio a pairing misses AA for body text.
pub const WARNING_RATIO: f64 = 4.5;

// ─── Limits ──────────────────────────────────────────────────────────────────

/// Resource guard for [`build_matrix`].
///
/// The matrix grows quadratically in the number of colors; this caps the
/// total number of evaluations a single call may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLimits {
    pub max_evaluations: usize,
}

impl MatrixLimits {
    #[must_use]
    pub const fn new(max_evaluations: usize) -> Self {
        Self { max_evaluations }
    }

    /// No ceiling.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Number of results `colors` × `sizes` would produce (saturating).
    #[must_use]
    pub const fn evaluations(colors: usize, sizes: usize) -> usize {
        colors
            .saturating_mul(colors.saturating_sub(1))
            .saturating_mul(sizes)
    }

    fn check(self, colors: usize, sizes: usize) -> Result<usize, ContrastError> {
        let requested = Self::evaluations(colors, sizes);
        if requested > self.max_evaluations {
            return Err(ContrastError::TooManyEvaluations {
                requested,
                limit: self.max_evaluations,
            });
        }
        Ok(requested)
    }
}

impl Default for MatrixLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EVALUATIONS)
    }
}

// ─── ComplianceMatrix ────────────────────────────────────────────────────────

/// Ordered map from result key to [`ContrastResult`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ComplianceMatrix {
    entries: IndexMap<String, ContrastResult>,
}

impl ComplianceMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result under its key.
    ///
    /// A key that is already present keeps its position and gets the new
    /// value (this only happens when the input lists a color twice).
    pub fn insert(&mut self, result: ContrastResult) {
        let key = result.key();
        if self.entries.contains_key(&key) {
            trace!(%key, "duplicate pairing replaced");
        }
        self.entries.insert(key, result);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ContrastResult> {
        self.entries.get(key)
    }

    /// `(key, result)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContrastResult)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Results in insertion order.
    pub fn results(&self) -> impl Iterator<Item = &ContrastResult> {
        self.entries.values()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The `n` highest-contrast results. Ties keep insertion order.
    #[must_use]
    pub fn best(&self, n: usize) -> Vec<&ContrastResult> {
        let mut sorted: Vec<&ContrastResult> = self.results().collect();
        sorted.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        sorted.truncate(n);
        sorted
    }

    /// The first `n` AA-compliant results in insertion order.
    #[must_use]
    pub fn accessible(&self, n: usize) -> Vec<&ContrastResult> {
        self.results()
            .filter(|r| r.compliance.aa)
            .take(n)
            .collect()
    }
}

impl FromIterator<ContrastResult> for ComplianceMatrix {
    fn from_iter<I: IntoIterator<Item = ContrastResult>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for result in iter {
            matrix.insert(result);
        }
        matrix
    }
}

/// Evaluate every ordered pair of distinct colors at every font size.
///
/// Empty `colors` or `sizes` yield an empty matrix, not an error.
///
/// # Errors
///
/// Returns [`ContrastError::TooManyEvaluations`] when N·(N−1)·M exceeds
/// `limits.max_evaluations`. Nothing is computed in that case.
pub fn build_matrix(
    colors: &[Color],
    sizes: &[FontSize],
    limits: &MatrixLimits,
) -> Result<ComplianceMatrix, ContrastError> {
    let evaluations = limits.check(colors.len(), sizes.len())?;
    debug!(
        colors = colors.len(),
        sizes = sizes.len(),
        evaluations,
        "building compliance matrix"
    );

    let mut matrix = ComplianceMatrix::new();
    for (i, &fg) in colors.iter().enumerate() {
        for (j, &bg) in colors.iter().enumerate() {
            if i == j {
                continue;
            }
            let ratio = contrast_ratio(fg, bg);
            for &size in sizes {
                matrix.insert(evaluate_with_ratio(fg, bg, ratio, Some(size)));
            }
        }
    }

    debug!(results = matrix.len(), "compliance matrix built");
    Ok(matrix)
}

// ─── Summary ─────────────────────────────────────────────────────────────────

/// Aggregate pass counts over a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub fully_compliant: usize,
    pub aa_compliant: usize,
    pub aaa_compliant: usize,
    /// `fully_compliant / total × 100`, one decimal with ties to even; 0 for
    /// an empty matrix.
    pub compliance_percentage: f64,
}

/// Overall verdict on a palette's accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// 80 % or more of the pairings are fully compliant.
    Excellent,
    /// At least half.
    Good,
    NeedsWork,
}

impl Summary {
    #[must_use]
    pub fn rating(&self) -> Rating {
        if self.compliance_percentage >= 80.0 {
            Rating::Excellent
        } else if self.compliance_percentage >= 50.0 {
            Rating::Good
        } else {
            Rating::NeedsWork
        }
    }
}

/// Count compliant pairings.
#[must_use]
pub fn summarize(matrix: &ComplianceMatrix) -> Summary {
    let total = matrix.len();
    let mut summary = Summary {
        total,
        fully_compliant: 0,
        aa_compliant: 0,
        aaa_compliant: 0,
        compliance_percentage: 0.0,
    };

    for r in matrix.results() {
        summary.fully_compliant += usize::from(r.overall_compliant);
        summary.aa_compliant += usize::from(r.compliance.aa);
        summary.aaa_compliant += usize::from(r.compliance.aaa);
    }

    if total > 0 {
        let pct = summary.fully_compliant as f64 / total as f64 * 100.0;
        summary.compliance_percentage = (pct * 10.0).round_ties_even() / 10.0;
    }

    summary
}

// ─── Recommendations ─────────────────────────────────────────────────────────

/// One piece of advice derived from a matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Recommendation {
    /// Pairings under 3:1, unreadable at any size.
    Critical {
        message: String,
        affected_combinations: Vec<String>,
        suggestion: String,
    },
    /// Pairings in [3:1, 4.5:1), only usable for large text.
    Warning {
        message: String,
        affected_combinations: Vec<String>,
        suggestion: String,
    },
    /// A foreground that fails AA against at least one background.
    ColorSpecific {
        color: Color,
        issue: String,
        /// Offending backgrounds, first-seen order, no duplicates.
        backgrounds: Vec<Color>,
        suggestion: String,
        /// Same hue, lightness adjusted to pass AA (small text) against the
        /// first offending background.
        replacement: Color,
    },
}

/// Derive recommendations: critical first, then warning, then one
/// color-specific entry per failing foreground in first-seen order.
///
/// The critical and warning tiers bucket on the two-decimal ratio shown in
/// the report; the color-specific tier follows exact AA compliance.
#[must_use]
pub fn recommend(matrix: &ComplianceMatrix) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let critical: Vec<String> = matrix
        .iter()
        .filter(|(_, r)| r.rounded_ratio() < CRITICAL_RATIO)
        .map(|(k, _)| k.to_string())
        .collect();
    if !critical.is_empty() {
        recommendations.push(Recommendation::Critical {
            message: format!(
                "{} combinations have very low contrast (< {CRITICAL_RATIO:.1})",
                critical.len()
            ),
            affected_combinations: critical,
            suggestion: "Pick colors with more contrast or increase the font size".to_string(),
        });
    }

    let warning: Vec<String> = matrix
        .iter()
        .filter(|(_, r)| (CRITICAL_RATIO..WARNING_RATIO).contains(&r.rounded_ratio()))
        .map(|(k, _)| k.to_string())
        .collect();
    if !warning.is_empty() {
        recommendations.push(Recommendation::Warning {
            message: format!("{} combinations do not meet WCAG AA", warning.len()),
            affected_combinations: warning,
            suggestion: "Increase contrast or reserve these combinations for large text"
                .to_string(),
        });
    }

    // Foreground → offending backgrounds, in first-seen order.
    let mut failing: IndexMap<Color, IndexSet<Color>> = IndexMap::new();
    for r in matrix.results().filter(|r| !r.compliance.aa) {
        failing.entry(r.foreground).or_default().insert(r.background);
    }

    for (color, backgrounds) in failing {
        let backgrounds: Vec<Color> = backgrounds.into_iter().collect();
        let replacement = ensure_contrast(
            color,
            backgrounds[0],
            ComplianceLevel::AA.min_ratio(false),
        );
        recommendations.push(Recommendation::ColorSpecific {
            color,
            issue: format!("Fails WCAG AA against {} background color(s)", backgrounds.len()),
            backgrounds,
            suggestion: "Replace this color with a higher-contrast alternative".to_string(),
            replacement,
        });
    }

    debug!(count = recommendations.len(), "recommendations derived");
    recommendations
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// The complete document handed to renderers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: Summary,
    pub detailed_results: ComplianceMatrix,
    pub recommendations: Vec<Recommendation>,
    pub wcag_levels: BTreeMap<ComplianceLevel, LevelThresholds>,
}

impl Report {
    /// Summarize and derive recommendations for `matrix`.
    #[must_use]
    pub fn new(matrix: ComplianceMatrix) -> Self {
        Self {
            summary: summarize(&matrix),
            recommendations: recommend(&matrix),
            wcag_levels: ComplianceLevel::ALL
                .into_iter()
                .map(|level| (level, level.thresholds()))
                .collect(),
            detailed_results: matrix,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::evaluate;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    fn px(v: f64) -> FontSize {
        FontSize::px(v)
    }

    fn build(colors: &[&str], sizes: &[FontSize]) -> ComplianceMatrix {
        let colors: Vec<Color> = colors.iter().map(|s| hex(s)).collect();
        build_matrix(&colors, sizes, &MatrixLimits::default()).unwrap()
    }

    // ── build_matrix ────────────────────────────────────────────────

    #[test]
    fn black_white_yields_two_symmetric_results() {
        let m = build(&["#000000", "#FFFFFF"], &[px(16.0)]);
        assert_eq!(m.len(), 2);
        let keys: Vec<&str> = m.keys().collect();
        assert_eq!(keys, vec!["#000000_on_#ffffff_16px", "#ffffff_on_#000000_16px"]);
        let a = m.get("#000000_on_#ffffff_16px").unwrap();
        let b = m.get("#ffffff_on_#000000_16px").unwrap();
        assert_eq!(a.ratio, b.ratio);
    }

    #[test]
    fn empty_colors_is_valid() {
        let m = build(&[], &[px(16.0)]);
        assert!(m.is_empty());
        let s = summarize(&m);
        assert_eq!(s.total, 0);
        assert_eq!(s.compliance_percentage, 0.0);
        assert!(recommend(&m).is_empty());
    }

    #[test]
    fn empty_sizes_is_valid() {
        let m = build(&["#000000", "#ffffff"], &[]);
        assert!(m.is_empty());
    }

    #[test]
    fn single_color_has_no_pairs() {
        assert!(build(&["#2e5b91"], &[px(16.0)]).is_empty());
    }

    #[test]
    fn insertion_order_is_fg_bg_size() {
        let m = build(&["#000000", "#ffffff", "#777777"], &[px(14.0), px(24.0)]);
        assert_eq!(m.len(), 12);
        let keys: Vec<&str> = m.keys().collect();
        assert_eq!(
            keys,
            vec![
                "#000000_on_#ffffff_14px",
                "#000000_on_#ffffff_24px",
                "#000000_on_#777777_14px",
                "#000000_on_#777777_24px",
                "#ffffff_on_#000000_14px",
                "#ffffff_on_#000000_24px",
                "#ffffff_on_#777777_14px",
                "#ffffff_on_#777777_24px",
                "#777777_on_#000000_14px",
                "#777777_on_#000000_24px",
                "#777777_on_#ffffff_14px",
                "#777777_on_#ffffff_24px",
            ]
        );
    }

    #[test]
    fn duplicate_colors_collapse_keys() {
        let m = build(&["#000000", "#ffffff", "#000000"], &[px(16.0)]);
        // Positions 0 and 2 differ, so black-on-black is evaluated once;
        // every later pairing repeats an existing key.
        let keys: Vec<&str> = m.keys().collect();
        assert_eq!(
            keys,
            vec![
                "#000000_on_#ffffff_16px",
                "#000000_on_#000000_16px",
                "#ffffff_on_#000000_16px",
            ]
        );
    }

    #[test]
    fn limit_is_enforced() {
        let colors = vec![Color::BLACK, Color::WHITE, hex("#777777")];
        let err = build_matrix(&colors, &[px(16.0)], &MatrixLimits::new(5)).unwrap_err();
        assert_eq!(err, ContrastError::TooManyEvaluations { requested: 6, limit: 5 });
        assert!(build_matrix(&colors, &[px(16.0)], &MatrixLimits::new(6)).is_ok());
    }

    #[test]
    fn evaluations_saturate() {
        assert_eq!(MatrixLimits::evaluations(usize::MAX, 2), usize::MAX);
        assert_eq!(MatrixLimits::evaluations(0, 10), 0);
        assert_eq!(MatrixLimits::evaluations(4, 3), 36);
    }

    // ── Views ───────────────────────────────────────────────────────

    #[test]
    fn best_sorts_by_ratio_stably() {
        let m = build(&["#000000", "#ffffff", "#777777"], &[px(16.0)]);
        let best: Vec<String> = m.best(3).iter().map(|r| r.key()).collect();
        assert_eq!(
            best,
            vec!["#000000_on_#ffffff_16px", "#ffffff_on_#000000_16px", "#000000_on_#777777_16px"]
        );
    }

    #[test]
    fn accessible_keeps_insertion_order() {
        let m = build(&["#000000", "#ffffff", "#777777"], &[px(16.0)]);
        let ok: Vec<String> = m.accessible(10).iter().map(|r| r.key()).collect();
        // #777777 vs white is 4.48:1, just short of AA.
        assert_eq!(
            ok,
            vec![
                "#000000_on_#ffffff_16px",
                "#000000_on_#777777_16px",
                "#ffffff_on_#000000_16px",
                "#777777_on_#000000_16px",
            ]
        );
    }

    // ── summarize ───────────────────────────────────────────────────

    #[test]
    fn summary_counts() {
        let m = build(&["#000000", "#ffffff", "#777777"], &[px(16.0), px(24.0)]);
        let s = summarize(&m);
        assert_eq!(s.total, 12);
        // B/W pairs pass everything at both sizes (4). Black/gray is 4.68:1:
        // AAA only for 24px (2). White/gray is 4.48:1: nothing full.
        assert_eq!(s.fully_compliant, 6);
        assert_eq!(s.aa_compliant, 10);
        assert_eq!(s.aaa_compliant, 6);
        assert_eq!(s.compliance_percentage, 50.0);
        assert_eq!(s.rating(), Rating::Good);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        let m = build(&["#000000", "#ffffff", "#777777"], &[px(16.0)]);
        let s = summarize(&m);
        // Only the two B/W pairs are fully compliant: 2/6.
        assert_eq!(s.fully_compliant, 2);
        assert_eq!(s.compliance_percentage, 33.3);
        assert_eq!(s.rating(), Rating::NeedsWork);
    }

    #[test]
    fn percentage_ties_round_to_even() {
        // 1 of 16 fully compliant is exactly 6.25 %.
        let pass = evaluate(Color::BLACK, Color::WHITE, Some(px(16.0)));
        let fails = (1..=15).map(|i| evaluate(hex("#eeeeee"), Color::WHITE, Some(px(f64::from(i)))));
        let m: ComplianceMatrix = std::iter::once(pass).chain(fails).collect();
        let s = summarize(&m);
        assert_eq!(s.total, 16);
        assert_eq!(s.fully_compliant, 1);
        assert_eq!(s.compliance_percentage, 6.2);
    }

    #[test]
    fn rating_thresholds() {
        let mut s = summarize(&ComplianceMatrix::new());
        s.compliance_percentage = 80.0;
        assert_eq!(s.rating(), Rating::Excellent);
        s.compliance_percentage = 79.9;
        assert_eq!(s.rating(), Rating::Good);
        s.compliance_percentage = 49.9;
        assert_eq!(s.rating(), Rating::NeedsWork);
    }

    // ── recommend ───────────────────────────────────────────────────

    #[test]
    fn recommendation_tiers_and_order() {
        let m = build(&["#ffffff", "#777777", "#eeeeee"], &[px(16.0)]);
        let recs = recommend(&m);

        let Recommendation::Critical { affected_combinations, .. } = &recs[0] else {
            panic!("first recommendation should be critical: {recs:?}");
        };
        assert_eq!(
            affected_combinations,
            &vec![
                "#ffffff_on_#eeeeee_16px".to_string(),
                "#eeeeee_on_#ffffff_16px".to_string(),
            ]
        );

        let Recommendation::Warning { affected_combinations, .. } = &recs[1] else {
            panic!("second recommendation should be a warning: {recs:?}");
        };
        assert_eq!(
            affected_combinations,
            &vec![
                "#ffffff_on_#777777_16px".to_string(),
                "#777777_on_#ffffff_16px".to_string(),
                "#777777_on_#eeeeee_16px".to_string(),
                "#eeeeee_on_#777777_16px".to_string(),
            ]
        );

        let colors: Vec<Color> = recs[2..]
            .iter()
            .map(|r| match r {
                Recommendation::ColorSpecific { color, .. } => *color,
                other => panic!("expected color-specific, got {other:?}"),
            })
            .collect();
        assert_eq!(colors, vec![Color::WHITE, hex("#777777"), hex("#eeeeee")]);
    }

    #[test]
    fn color_specific_lists_unique_backgrounds() {
        let m = build(&["#ffffff", "#eeeeee", "#dddddd"], &[px(14.0), px(24.0)]);
        let recs = recommend(&m);
        let Some(Recommendation::ColorSpecific { color, backgrounds, replacement, .. }) = recs
            .iter()
            .find(|r| matches!(r, Recommendation::ColorSpecific { .. }))
        else {
            panic!("expected a color-specific recommendation");
        };
        assert_eq!(*color, Color::WHITE);
        assert_eq!(backgrounds, &vec![hex("#eeeeee"), hex("#dddddd")]);
        assert!(contrast_ratio(*replacement, hex("#eeeeee")) >= 4.5);
    }

    #[test]
    fn tiers_bucket_on_the_displayed_ratio() {
        // 4.4988…:1 displays as 4.50, so it is not a warning, but it still
        // misses AA and gets a color-specific entry per direction.
        let m = build(&["#0078d7", "#ffffff"], &[px(16.0)]);
        let recs = recommend(&m);
        let tiers: Vec<String> = serde_json::to_value(&recs)
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["type"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(tiers, vec!["color_specific", "color_specific"]);

        let json = serde_json::to_value(Report::new(m)).unwrap();
        assert_eq!(json["detailedResults"]["#0078d7_on_#ffffff_16px"]["ratio"], 4.5);
    }

    #[test]
    fn passing_matrix_has_no_recommendations() {
        let m = build(&["#000000", "#ffffff"], &[px(16.0)]);
        assert!(recommend(&m).is_empty());
    }

    // ── Report ──────────────────────────────────────────────────────

    #[test]
    fn report_json_shape() {
        let report = Report::new(build(&["#000000", "#ffffff"], &[px(16.0)]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["summary"]["compliancePercentage"], 100.0);
        assert_eq!(json["wcagLevels"]["AA"]["small"], 4.5);
        assert_eq!(json["wcagLevels"]["AAA"]["large"], 4.5);
        assert_eq!(
            json["detailedResults"]["#000000_on_#ffffff_16px"]["compliance"]["AAA"],
            true
        );
        assert_eq!(json["recommendations"], serde_json::json!([]));
    }

    #[test]
    fn report_preserves_result_order_in_json() {
        let report = Report::new(build(&["#ffffff", "#000000"], &[px(16.0)]));
        let text = serde_json::to_string(&report.detailed_results).unwrap();
        let first = text.find("#ffffff_on_#000000_16px").unwrap();
        let second = text.find("#000000_on_#ffffff_16px").unwrap();
        assert!(first < second);
    }

    #[test]
    fn recommendation_json_tags() {
        let m = build(&["#ffffff", "#eeeeee"], &[px(16.0)]);
        let json = serde_json::to_value(recommend(&m)).unwrap();
        assert_eq!(json[0]["type"], "critical");
        assert!(json[0]["affectedCombinations"].is_array());
        assert_eq!(json[1]["type"], "color_specific");
        assert_eq!(json[1]["color"], "#ffffff");
    }
}
