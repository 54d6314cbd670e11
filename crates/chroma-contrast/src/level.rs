// SPDX-License-Identifier: MIT

//! WCAG conformance levels and their contrast thresholds.
//!
//! | Level | Small text | Large text |
//! |-------|-----------:|-----------:|
//! | A     | 3.0        | 3.0        |
//! | AA    | 4.5        | 3.0        |
//! | AAA   | 7.0        | 4.5        |
//!
//! Every threshold of a higher level is at least the matching threshold of
//! a lower one, so passing AAA implies passing AA implies passing A.

use std::fmt;

use serde::Serialize;

/// A WCAG conformance level, ordered from least to most strict.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ComplianceLevel {
    A,
    AA,
    AAA,
}

/// Minimum contrast ratios for one level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelThresholds {
    pub small: f64,
    pub large: f64,
}

impl ComplianceLevel {
    /// All levels, least strict first.
    pub const ALL: [Self; 3] = [Self::A, Self::AA, Self::AAA];

    /// Both thresholds for this level.
    #[must_use]
    pub const fn thresholds(self) -> LevelThresholds {
        match self {
            Self::A => LevelThresholds { small: 3.0, large: 3.0 },
            Self::AA => LevelThresholds { small: 4.5, large: 3.0 },
            Self::AAA => LevelThresholds { small: 7.0, large: 4.5 },
        }
    }

    /// Minimum contrast ratio for small or large text.
    #[must_use]
    pub const fn min_ratio(self, large_text: bool) -> f64 {
        let t = self.thresholds();
        if large_text { t.large } else { t.small }
    }

    /// Whether `ratio` meets this level.
    #[must_use]
    pub fn is_met(self, ratio: f64, large_text: bool) -> bool {
        ratio >= self.min_ratio(large_text)
    }

    /// Highest level met by `ratio` for the given text size, if any.
    #[must_use]
    pub fn classify_for(ratio: f64, large_text: bool) -> Option<Self> {
        Self::ALL
            .into_iter()
            .rev()
            .find(|level| level.is_met(ratio, large_text))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Highest level met by `ratio` under the small-text thresholds.
///
/// Small text is the conservative reading: a ratio that earns a badge here
/// earns at least the same badge at any size.
#[must_use]
pub fn classify(ratio: f64) -> Option<ComplianceLevel> {
    ComplianceLevel::classify_for(ratio, false)
}

// ─── Compliance ──────────────────────────────────────────────────────────────

/// Pass/fail per level for one pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Compliance {
    #[serde(rename = "A")]
    pub a: bool,
    #[serde(rename = "AA")]
    pub aa: bool,
    #[serde(rename = "AAA")]
    pub aaa: bool,
}

impl Compliance {
    /// Check `ratio` against every level.
    #[must_use]
    pub fn check(ratio: f64, large_text: bool) -> Self {
        Self {
            a: ComplianceLevel::A.is_met(ratio, large_text),
            aa: ComplianceLevel::AA.is_met(ratio, large_text),
            aaa: ComplianceLevel::AAA.is_met(ratio, large_text),
        }
    }

    #[must_use]
    pub const fn get(self, level: ComplianceLevel) -> bool {
        match level {
            ComplianceLevel::A => self.a,
            ComplianceLevel::AA => self.aa,
            ComplianceLevel::AAA => self.aaa,
        }
    }

    /// True when every level passes.
    #[must_use]
    pub const fn all(self) -> bool {
        self.a && self.aa && self.aaa
    }

    /// Highest passing level.
    #[must_use]
    pub fn highest(self) -> Option<ComplianceLevel> {
        ComplianceLevel::ALL.into_iter().rev().find(|&level| self.get(level))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_table() {
        assert_eq!(ComplianceLevel::A.min_ratio(false), 3.0);
        assert_eq!(ComplianceLevel::A.min_ratio(true), 3.0);
        assert_eq!(ComplianceLevel::AA.min_ratio(false), 4.5);
        assert_eq!(ComplianceLevel::AA.min_ratio(true), 3.0);
        assert_eq!(ComplianceLevel::AAA.min_ratio(false), 7.0);
        assert_eq!(ComplianceLevel::AAA.min_ratio(true), 4.5);
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(2.99), None);
        assert_eq!(classify(3.0), Some(ComplianceLevel::A));
        assert_eq!(classify(4.5), Some(ComplianceLevel::AA));
        assert_eq!(classify(6.99), Some(ComplianceLevel::AA));
        assert_eq!(classify(7.0), Some(ComplianceLevel::AAA));
        assert_eq!(classify(21.0), Some(ComplianceLevel::AAA));
    }

    #[test]
    fn classify_large_text_is_more_lenient() {
        assert_eq!(ComplianceLevel::classify_for(3.0, true), Some(ComplianceLevel::AA));
        assert_eq!(ComplianceLevel::classify_for(4.5, true), Some(ComplianceLevel::AAA));
    }

    #[test]
    fn compliance_check_small_text() {
        let c = Compliance::check(4.54, false);
        assert_eq!(c, Compliance { a: true, aa: true, aaa: false });
        assert!(!c.all());
        assert_eq!(c.highest(), Some(ComplianceLevel::AA));
    }

    #[test]
    fn compliance_failing() {
        let c = Compliance::check(1.5, true);
        assert_eq!(c, Compliance::default());
        assert_eq!(c.highest(), None);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(ComplianceLevel::A < ComplianceLevel::AA);
        assert!(ComplianceLevel::AA < ComplianceLevel::AAA);
    }

    #[test]
    fn compliance_serializes_with_level_names() {
        let json = serde_json::to_string(&Compliance::check(21.0, false)).unwrap();
        assert_eq!(json, r#"{"A":true,"AA":true,"AAA":true}"#);
    }
}
