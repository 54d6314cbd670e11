// SPDX-License-Identifier: MIT

//! Optional TOML configuration for the `chroma` binary.
//!
//! Every field has a default, so a file only needs the keys it changes:
//!
//! ```toml
//! [audit]
//! fonts = ["14px", "18px", "24px"]
//! max_evaluations = 100000
//!
//! [palette]
//! mood = "neutral"
//! ```
//!
//! Command-line flags take precedence over anything set here.

use std::path::Path;

use anyhow::{Context, Result};
use chroma_contrast::{FontSize, MatrixLimits, matrix::DEFAULT_MAX_EVALUATIONS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub audit: AuditConfig,
    pub palette: PaletteConfig,
}

/// Settings for `chroma audit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Font sizes tested when `--fonts` is not given.
    pub fonts: Vec<String>,
    /// Ceiling on N·(N−1)·M evaluations.
    pub max_evaluations: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            fonts: vec!["14px".into(), "18px".into(), "24px".into()],
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
        }
    }
}

/// Settings for `chroma palette`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub mood: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self { mood: "neutral".into() }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

impl AuditConfig {
    /// Parse the configured font sizes.
    pub fn font_sizes(&self) -> Result<Vec<FontSize>> {
        self.fonts
            .iter()
            .map(|s| s.parse::<FontSize>().with_context(|| format!("invalid font size in config: {s:?}")))
            .collect()
    }

    #[must_use]
    pub const fn limits(&self) -> MatrixLimits {
        MatrixLimits::new(self.max_evaluations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.audit.fonts, vec!["14px", "18px", "24px"]);
        assert_eq!(config.audit.max_evaluations, 100_000);
        assert_eq!(config.palette.mood, "neutral");
        assert_eq!(
            config.audit.font_sizes().unwrap(),
            vec![FontSize::px(14.0), FontSize::px(18.0), FontSize::px(24.0)]
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "chroma.toml", "[palette]\nmood = \"warm\"\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.palette.mood, "warm");
        assert_eq!(config.audit, AuditConfig::default());
    }

    #[test]
    fn full_file() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "chroma.toml",
            "[audit]\nfonts = [\"1.5rem\"]\nmax_evaluations = 12\n\n[palette]\nmood = \"cool\"\n",
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.audit.font_sizes().unwrap(), vec![FontSize::rem(1.5)]);
        assert_eq!(config.audit.limits(), MatrixLimits::new(12));
    }

    #[test]
    fn empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.toml", "");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load(Path::new("/nonexistent/chroma.toml")).unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.toml", "[audit\nfonts = ");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "typo.toml", "[audit]\nfont = [\"14px\"]\n");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn bad_font_in_config() {
        let config = Config {
            audit: AuditConfig { fonts: vec!["huge".into()], ..AuditConfig::default() },
            ..Config::default()
        };
        assert!(config.audit.font_sizes().is_err());
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
