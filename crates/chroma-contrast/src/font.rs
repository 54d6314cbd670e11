// SPDX-License-Identifier: MIT

//! Font sizes and the WCAG "large text" carve-out.
//!
//! | Unit  | Large when          | Note                                  |
//! |-------|---------------------|---------------------------------------|
//! | `px`  | value >= 18         |                                       |
//! | `pt`  | value × 1.333 >= 18 | 1pt = 1.333px; 14pt is in, 13.5pt out  |
//! | `em`  | value >= 1.2        | assumes a 16px root (1.2em = 19.2px)   |
//! | `rem` | value >= 1.2        | same 16px assumption                   |
//!
//! The em/rem threshold stays at 1.2 even though 18px on a 16px root is
//! 1.125em; existing reports depend on that cutoff.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ContrastError;

/// Pixels per point.
pub const PX_PER_PT: f64 = 1.333;

/// Root font size assumed for relative units.
pub const ROOT_PX: f64 = 16.0;

/// Pixel size at or above which text counts as large.
pub const LARGE_TEXT_PX: f64 = 18.0;

/// Relative size at or above which em/rem text counts as large.
pub const LARGE_TEXT_EM: f64 = 1.2;

static FONT_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)(px|pt|em|rem)$").expect("valid font-size regex")
});

/// CSS length unit of a [`FontSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontUnit {
    Px,
    Pt,
    Em,
    Rem,
}

impl FontUnit {
    /// The CSS suffix for this unit.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Pt => "pt",
            Self::Em => "em",
            Self::Rem => "rem",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "px" => Some(Self::Px),
            "pt" => Some(Self::Pt),
            "em" => Some(Self::Em),
            "rem" => Some(Self::Rem),
            _ => None,
        }
    }
}

/// A font size with its unit, e.g. `16px` or `1.5rem`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSize {
    pub value: f64,
    pub unit: FontUnit,
}

impl FontSize {
    #[must_use]
    pub const fn new(value: f64, unit: FontUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::new(value, FontUnit::Px)
    }

    #[must_use]
    pub const fn pt(value: f64) -> Self {
        Self::new(value, FontUnit::Pt)
    }

    #[must_use]
    pub const fn em(value: f64) -> Self {
        Self::new(value, FontUnit::Em)
    }

    #[must_use]
    pub const fn rem(value: f64) -> Self {
        Self::new(value, FontUnit::Rem)
    }

    /// Approximate size in CSS pixels.
    #[must_use]
    pub fn to_px(self) -> f64 {
        match self.unit {
            FontUnit::Px => self.value,
            FontUnit::Pt => self.value * PX_PER_PT,
            FontUnit::Em | FontUnit::Rem => self.value * ROOT_PX,
        }
    }

    /// Whether WCAG's lower "large text" thresholds apply.
    #[must_use]
    pub fn is_large_text(self) -> bool {
        match self.unit {
            FontUnit::Px | FontUnit::Pt => self.to_px() >= LARGE_TEXT_PX,
            FontUnit::Em | FontUnit::Rem => self.value >= LARGE_TEXT_EM,
        }
    }

    /// Parse a comma-separated list such as `"14px, 18px, 1.5rem"`.
    ///
    /// Empty items are skipped.
    ///
    /// # Errors
    ///
    /// Fails on the first item that does not parse.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, ContrastError> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for FontSize {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ContrastError::InvalidFontSize(s.to_string());
        let caps = FONT_SIZE.captures(s.trim()).ok_or_else(invalid)?;
        let value: f64 = caps[1].parse().map_err(|_| invalid())?;
        let unit = FontUnit::from_suffix(&caps[2]).ok_or_else(invalid)?;
        Ok(Self { value, unit })
    }
}

impl fmt::Display for FontSize {
    /// `16px`, `1.5em`. Integral values print without a fraction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
