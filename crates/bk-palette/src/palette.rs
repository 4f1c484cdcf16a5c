//! Palette derivation — from one seed color to six named swatches.
//!
//! The seed is converted to HSL once, every offset of the table is applied
//! to it, and each result is converted back to hex. Swatches come out in
//! table order, which is also grid order in the preview.

use bk_color::HexColor;

use crate::offsets::{PaletteKind, SWATCH_COUNT, SwatchOffset};

/// Indices of the swatches used as typography tile backgrounds, in
/// regular / medium / semibold order.
pub const ANCHOR_INDICES: [usize; 3] = [2, 0, 4];

/// One `{name, hex}` entry of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: HexColor,
}

/// Derive the six swatches for `seed` from an offset table.
#[must_use]
pub fn derive(seed: HexColor, table: &[SwatchOffset; SWATCH_COUNT]) -> [Swatch; SWATCH_COUNT] {
    let base = seed.to_hsl();
    table.map(|offset| Swatch {
        name: offset.name,
        hex: offset.apply(base).to_hex(),
    })
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A derived brand palette: the seed it came from plus its six swatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
    seed: HexColor,
    swatches: [Swatch; SWATCH_COUNT],
}

impl Palette {
    /// Derive the palette of `kind` from `seed`.
    #[must_use]
    pub fn derive(seed: HexColor, kind: PaletteKind) -> Self {
        Self {
            kind,
            seed,
            swatches: derive(seed, kind.offsets()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// The seed color as the user picked it (before any rounding).
    #[must_use]
    pub const fn seed(&self) -> HexColor {
        self.seed
    }

    #[must_use]
    pub const fn swatches(&self) -> &[Swatch; SWATCH_COUNT] {
        &self.swatches
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    /// The swatch derived with the identity offset.
    ///
    /// Equal to [`Palette::seed`] up to HSL rounding.
    #[must_use]
    pub const fn seed_swatch(&self) -> &Swatch {
        &self.swatches[self.kind.seed_index()]
    }

    /// Whether any swatch has exactly this color.
    #[must_use]
    pub fn contains(&self, hex: HexColor) -> bool {
        self.swatches.iter().any(|s| s.hex == hex)
    }

    /// The regular / medium / semibold typography backgrounds.
    #[must_use]
    pub fn typography_anchors(&self) -> [Swatch; 3] {
        ANCHOR_INDICES.map(|i| self.swatches[i])
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offsets::{PRIMARY_OFFSETS, SECONDARY_OFFSETS};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    fn hexes(palette: &Palette) -> Vec<String> {
        palette.iter().map(|s| s.hex.to_string()).collect()
    }

    fn channel_distance(a: HexColor, b: HexColor) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn default_primary_palette() {
        let palette = Palette::derive(hex("#2CC295"), PaletteKind::Primary);
        assert_eq!(
            hexes(&palette),
            ["#0a1813", "#163f31", "#206853", "#2cc295", "#6ce8cd", "#dddddd"]
        );
    }

    #[test]
    fn default_secondary_palette() {
        let palette = Palette::derive(hex("#095544"), PaletteKind::Secondary);
        assert_eq!(
            hexes(&palette),
            ["#06251b", "#083c2e", "#095544", "#078a79", "#03a79f", "#49abae"]
        );
    }

    #[test]
    fn names_follow_table_order() {
        let palette = Palette::derive(hex("#2CC295"), PaletteKind::Primary);
        let names: Vec<_> = palette.iter().map(|s| s.name).collect();
        let expected: Vec<_> = PRIMARY_OFFSETS.iter().map(|o| o.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn seed_swatch_is_mountain_meadow() {
        let seed = hex("#2CC295");
        let palette = Palette::derive(seed, PaletteKind::Primary);
        assert_eq!(palette.seed_swatch().name, "Mountain Meadow");
        assert_eq!(palette.seed_swatch().hex, seed);
        assert_eq!(palette.get(3).map(|s| s.hex), Some(seed));
    }

    #[test]
    fn black_seed_clamps_lightness() {
        let palette = Palette::derive(HexColor::BLACK, PaletteKind::Primary);
        // Everything darker than the seed collapses onto black.
        for swatch in &palette.swatches()[..4] {
            assert_eq!(swatch.hex, HexColor::BLACK, "{}", swatch.name);
        }
        // Anti-Flash White: dS = -80 clamps to gray, dL = +40 → l = 40.
        let white = palette.get(5).unwrap();
        assert_eq!(white.hex.to_hsl().l, 40.0);
        assert_eq!(white.hex, hex("#666666"));
    }

    #[test]
    fn white_seed_rich_black_is_gray() {
        let palette = Palette::derive(HexColor::WHITE, PaletteKind::Primary);
        let rich_black = palette.get(0).unwrap().hex;
        assert_eq!(rich_black.to_hsl().l, 60.0);
        assert!(rich_black.r.abs_diff(rich_black.g) <= 1);
        assert!(rich_black.g.abs_diff(rich_black.b) <= 1);
        assert_eq!(rich_black, hex("#999999"));
    }

    #[test]
    fn typography_anchors_pick_2_0_4() {
        let palette = Palette::derive(hex("#095544"), PaletteKind::Secondary);
        let anchors = palette.typography_anchors();
        assert_eq!(anchors[0].name, "Forest");
        assert_eq!(anchors[1].name, "Pine");
        assert_eq!(anchors[2].name, "Mint");
        assert_eq!(anchors[0].hex, hex("#095544"));
    }

    #[test]
    fn contains_checks_membership() {
        let palette = Palette::derive(hex("#2CC295"), PaletteKind::Primary);
        assert!(palette.contains(hex("#6ce8cd")));
        assert!(!palette.contains(hex("#123456")));
    }

    #[test]
    fn gray_seed_ignores_hue_shifts_while_unsaturated() {
        let seed = hex("#808080");
        for kind in PaletteKind::ALL {
            let palette = Palette::derive(seed, kind);
            for (swatch, offset) in palette.iter().zip(kind.offsets()) {
                if offset.ds > 0 {
                    continue;
                }
                let c = swatch.hex;
                assert!(c.r == c.g && c.g == c.b, "{} = {c} should stay gray", swatch.name);
            }
        }
    }

    #[test]
    fn gray_seed_picks_up_hue_when_saturation_grows() {
        let seed = hex("#808080");
        let primary = Palette::derive(seed, PaletteKind::Primary);
        let secondary = Palette::derive(seed, PaletteKind::Secondary);
        // Caribbean Green, Frog and Mint add saturation, so their hue shift shows.
        assert_eq!(primary.get(4).unwrap().hex, hex("#bbadab"));
        assert_eq!(secondary.get(3).unwrap().hex, hex("#a4918f"));
        assert_eq!(secondary.get(4).unwrap().hex, hex("#b49d99"));
    }

    #[test]
    fn identical_seeds_derive_independently() {
        let seed = hex("#2CC295");
        let primary = Palette::derive(seed, PaletteKind::Primary);
        let secondary = Palette::derive(seed, PaletteKind::Secondary);
        assert_eq!(primary.seed_swatch().hex, secondary.seed_swatch().hex);
        assert_ne!(primary.swatches(), secondary.swatches());
    }

    proptest! {
        #[test]
        fn every_palette_has_six_swatches(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            for kind in PaletteKind::ALL {
                let palette = Palette::derive(HexColor::rgb(r, g, b), kind);
                prop_assert_eq!(palette.swatches().len(), SWATCH_COUNT);
            }
        }

        #[test]
        fn offsets_stay_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let base = HexColor::rgb(r, g, b).to_hsl();
            for offset in PRIMARY_OFFSETS.iter().chain(SECONDARY_OFFSETS.iter()) {
                let hsl = offset.apply(base);
                prop_assert!(hsl.h < 360);
                prop_assert!((0.0..=100.0).contains(&hsl.s));
                prop_assert!((0.0..=100.0).contains(&hsl.l));
            }
        }

        #[test]
        fn seed_swatch_is_fixed_point(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let seed = HexColor::rgb(r, g, b);
            for kind in PaletteKind::ALL {
                let palette = Palette::derive(seed, kind);
                prop_assert!(channel_distance(palette.seed_swatch().hex, seed) <= 3);
            }
        }

        #[test]
        fn derive_is_pure(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let seed = HexColor::rgb(r, g, b);
            for kind in PaletteKind::ALL {
                prop_assert_eq!(Palette::derive(seed, kind), Palette::derive(seed, kind));
            }
        }
    }
}
