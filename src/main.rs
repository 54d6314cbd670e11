// SPDX-License-Identifier: MIT
//
// chroma — color science and WCAG accessibility from the command line.
//
// This is the main binary that wires together all the crates:
//
//   chroma-color    → hex / HSL / linear values, relative luminance
//   chroma-contrast → contrast ratio, compliance levels, matrices, reports
//   chroma-palette  → mood-driven palettes, self-audit, recolorings
//
// Every subcommand prints exactly one pretty-printed JSON document on
// stdout. Logs go to stderr so the output can be piped straight into a
// renderer:
//
//   argv → Cli → (config file) → engine call → serde_json → stdout
//                                     │
//                                     └─ tracing → stderr

mod config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chroma_color::{Color, parse_color_list};
use chroma_contrast::{
    ComplianceLevel, ContrastResult, FontSize, MatrixLimits, Rating, Report, build_matrix,
    ensure_contrast, evaluate,
};
use chroma_palette::{
    Mood, Palette, PaletteAudit, VariationSet, audit_palette, generate_palette, variations,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "chroma", version, about = "Color palettes and WCAG contrast audits")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Read defaults from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full palette from one seed color
    Palette {
        /// Seed color, `#RRGGBB`
        seed: String,

        /// neutral, professional, creative, energetic (vibrant), warm, cool
        #[arg(long)]
        mood: Option<String>,

        /// Include a contrast self-check of the generated palette
        #[arg(long)]
        audit: bool,
    },

    /// Evaluate every foreground/background/font-size combination
    Audit {
        /// Comma-separated colors; `black` and `white` are accepted
        #[arg(long)]
        colors: String,

        /// Comma-separated font sizes, e.g. `14px,18px,1.5rem`
        #[arg(long)]
        fonts: Option<String>,

        /// Also list the N highest-contrast combinations
        #[arg(long, value_name = "N")]
        best: Option<usize>,

        /// Refuse matrices larger than this many evaluations
        #[arg(long)]
        max_evaluations: Option<usize>,
    },

    /// Score a single foreground/background pairing
    Check {
        /// Foreground color
        foreground: String,

        /// Background color
        background: String,

        /// Font size, e.g. `16px`; small text when omitted
        #[arg(long)]
        font: Option<String>,
    },

    /// Produce lighter, darker and hue-shifted variants of a color set
    Vary {
        /// Colors to recolor, in order
        #[arg(required = true)]
        colors: Vec<String>,

        /// Number of variation sets
        #[arg(long, default_value_t = 3)]
        count: usize,
    },
}

// ─── Output documents ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteOutput {
    seed: Color,
    mood: Mood,
    palette: Palette,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessibility: Option<PaletteAudit>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuditOutput {
    #[serde(flatten)]
    report: Report,
    rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_combinations: Option<Vec<ContrastResult>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput {
    result: ContrastResult,
    badge: &'static str,
    /// Nearest same-hue foreground that passes AA, when the input does not.
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<Color>,
}

#[derive(Debug, Serialize)]
struct VaryOutput {
    colors: Vec<Color>,
    variations: Vec<VariationSet>,
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// Resolve a mood token, warning when it falls back to neutral.
fn resolve_mood(token: &str) -> Mood {
    Mood::from_name(token).unwrap_or_else(|| {
        warn!(mood = token, "unknown mood, falling back to neutral");
        Mood::Neutral
    })
}

fn parse_color(s: &str, what: &str) -> Result<Color> {
    s.parse().with_context(|| format!("invalid {what}"))
}

fn cmd_palette(config: &Config, seed: &str, mood: Option<&str>, audit: bool) -> Result<PaletteOutput> {
    let mood = resolve_mood(mood.unwrap_or(&config.palette.mood));
    let seed = parse_color(seed, "seed color")?;
    let palette = generate_palette(seed, mood);
    info!(%seed, %mood, "palette generated");

    let accessibility = audit.then(|| audit_palette(&palette));
    Ok(PaletteOutput {
        seed,
        mood,
        palette,
        accessibility,
    })
}

fn cmd_audit(
    config: &Config,
    colors: &str,
    fonts: Option<&str>,
    best: Option<usize>,
    max_evaluations: Option<usize>,
) -> Result<AuditOutput> {
    let colors = parse_color_list(colors).context("invalid --colors")?;
    let sizes = match fonts {
        Some(list) => FontSize::parse_list(list).context("invalid --fonts")?,
        None => config.audit.font_sizes()?,
    };
    let limits = max_evaluations.map_or_else(|| config.audit.limits(), MatrixLimits::new);
    debug!(colors = colors.len(), sizes = sizes.len(), ?limits, "auditing");

    let matrix = build_matrix(&colors, &sizes, &limits)?;
    let best_combinations = best.map(|n| matrix.best(n).into_iter().cloned().collect());
    let report = Report::new(matrix);
    info!(
        total = report.summary.total,
        compliance = report.summary.compliance_percentage,
        "audit complete"
    );

    Ok(AuditOutput {
        rating: report.summary.rating(),
        report,
        best_combinations,
    })
}

fn cmd_check(foreground: &str, background: &str, font: Option<&str>) -> Result<CheckOutput> {
    let fg = parse_color(foreground, "foreground color")?;
    let bg = parse_color(background, "background color")?;
    let size = font
        .map(str::parse::<FontSize>)
        .transpose()
        .context("invalid --font")?;

    let result = evaluate(fg, bg, size);
    let suggestion = (!result.compliance.aa).then(|| {
        ensure_contrast(fg, bg, ComplianceLevel::AA.min_ratio(result.is_large_text))
    });

    Ok(CheckOutput {
        badge: result.badge(),
        result,
        suggestion,
    })
}

fn cmd_vary(colors: &[String], count: usize) -> Result<VaryOutput> {
    let colors = colors
        .iter()
        .map(|s| parse_color(s, "color"))
        .collect::<Result<Vec<_>>>()?;
    let variations = variations(&colors, count);
    Ok(VaryOutput { colors, variations })
}

/// Write one JSON document to stdout.
fn emit<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("writing JSON")?;
    writeln!(out).context("writing JSON")?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Palette { seed, mood, audit } => {
            emit(&cmd_palette(&config, &seed, mood.as_deref(), audit)?)
        }
        Commands::Audit {
            colors,
            fonts,
            best,
            max_evaluations,
        } => emit(&cmd_audit(
            &config,
            &colors,
            fonts.as_deref(),
            best,
            max_evaluations,
        )?),
        Commands::Check {
            foreground,
            background,
            font,
        } => emit(&cmd_check(&foreground, &background, font.as_deref())?),
        Commands::Vary { colors, count } => emit(&cmd_vary(&colors, count)?),
    }
}

fn init_tracing(verbose: bool, debug: bool) {
    let filter_layer = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("chroma: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
