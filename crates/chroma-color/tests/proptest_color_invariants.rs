// SPDX-License-Identifier: MIT

//! Property-based invariant tests for color values.
//!
//! 1. Hex round-trip is exact (case-normalized).
//! 2. sRGB → HSL → sRGB reproduces every channel within ±1.
//! 3. `to_hsl` always lands in range.
//! 4. `from_hsl` never panics on arbitrary (even absurd) input.
//! 5. Relative luminance stays within [0, 1].

use chroma_color::{Color, Hsl, relative_luminance};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn color_strategy() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb8(r, g, b))
}

fn hex_strategy() -> impl Strategy<Value = String> {
    "#[0-9a-fA-F]{6}"
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Hex round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_roundtrip_is_exact(s in hex_strategy()) {
        let color = Color::from_hex(&s).unwrap();
        prop_assert_eq!(color.to_hex(), s.to_ascii_lowercase());
    }
}

proptest! {
    #[test]
    fn hex_output_shape(c in color_strategy()) {
        let hex = c.to_hex();
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));
        prop_assert_eq!(Color::from_hex(&hex).unwrap(), c);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. HSL round-trip within ±1
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hsl_roundtrip_within_one(c in color_strategy()) {
        let back = Color::from_hsl(c.to_hsl());
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
        prop_assert!(
            close(c.r(), back.r()) && close(c.g(), back.g()) && close(c.b(), back.b()),
            "{:?} came back as {:?}", c, back
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. HSL range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hsl_in_range(c in color_strategy()) {
        let Hsl { h, s, l } = c.to_hsl();
        prop_assert!((0.0..360.0).contains(&h), "hue {}", h);
        prop_assert!((0.0..=1.0).contains(&s), "saturation {}", s);
        prop_assert!((0.0..=1.0).contains(&l), "lightness {}", l);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. from_hsl is total
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn from_hsl_normalizes(h in -10_000.0f64..10_000.0, s in -5.0f64..5.0, l in -5.0f64..5.0) {
        let direct = Color::from_hsl(Hsl { h, s, l });
        let normalized = Color::from_hsl(Hsl::new(h, s, l));
        prop_assert_eq!(direct, normalized);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Luminance range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn luminance_in_unit_range(c in color_strategy()) {
        let lum = relative_luminance(c);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&lum), "luminance {}", lum);
    }
}
