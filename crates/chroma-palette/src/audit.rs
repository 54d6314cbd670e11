// SPDX-License-Identifier: MIT

//! Accessibility self-check for a generated palette.
//!
//! Scores the pairings a palette is most likely to be used for: body text
//! on the background, and each accent on pure white and pure black.

use chroma_color::Color;
use chroma_contrast::{ComplianceLevel, classify, contrast_ratio};
use serde::Serialize;
use tracing::debug;

use crate::generator::Palette;

/// One scored pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    /// Highest level met under the small-text thresholds.
    pub level: Option<ComplianceLevel>,
}

impl AuditEntry {
    fn new(name: String, foreground: Color, background: Color) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            name,
            foreground,
            background,
            ratio,
            level: classify(ratio),
        }
    }
}

/// Result of [`audit_palette`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteAudit {
    /// `primary_text`, `secondary_text`, then `<accent>_on_white` and
    /// `<accent>_on_dark` for each accent.
    pub entries: Vec<AuditEntry>,
    /// Both text roles reach 4.5:1 on the background.
    pub text_meets_aa: bool,
    /// Both text roles reach 7:1 on the background.
    pub text_meets_aaa: bool,
}

impl PaletteAudit {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AuditEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Score the palette's key pairings.
#[must_use]
pub fn audit_palette(palette: &Palette) -> PaletteAudit {
    let semantic = &palette.semantic;
    let mut entries = vec![
        AuditEntry::new("primary_text".into(), semantic.text_primary, semantic.background),
        AuditEntry::new("secondary_text".into(), semantic.text_secondary, semantic.background),
    ];

    for (name, accent) in palette.accents.named() {
        entries.push(AuditEntry::new(format!("{name}_on_white"), accent, Color::WHITE));
        entries.push(AuditEntry::new(format!("{name}_on_dark"), accent, Color::BLACK));
    }

    let text_meets = |level: ComplianceLevel| {
        entries[..2]
            .iter()
            .all(|e| level.is_met(e.ratio, false))
    };
    let text_meets_aa = text_meets(ComplianceLevel::AA);
    let text_meets_aaa = text_meets(ComplianceLevel::AAA);

    debug!(text_meets_aa, text_meets_aaa, "palette audited");
    PaletteAudit {
        entries,
        text_meets_aa,
        text_meets_aaa,
    }
}
