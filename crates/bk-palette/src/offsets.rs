//! Offset tables — the fixed perceptual relationships between a seed color
//! and the six swatches of its palette.
//!
//! Each entry nudges the seed's hue (degrees), saturation and lightness
//! (percentage points). The zero entry of each table reproduces the seed
//! itself, so a user always sees their own color in the grid.

use std::fmt;
use std::str::FromStr;

use bk_color::Hsl;
use thiserror::Error;

/// Number of swatches in every palette.
pub const SWATCH_COUNT: usize = 6;

/// One named HSL perturbation applied to a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwatchOffset {
    pub name: &'static str,
    /// Hue shift in degrees (wraps around the wheel).
    pub dh: i32,
    /// Saturation shift in percentage points (clamped to 0–100).
    pub ds: i32,
    /// Lightness shift in percentage points (clamped to 0–100).
    pub dl: i32,
}

impl SwatchOffset {
    const fn new(name: &'static str, dh: i32, ds: i32, dl: i32) -> Self {
        Self { name, dh, ds, dl }
    }

    /// Whether this offset leaves the seed unchanged.
    #[must_use]
    pub const fn is_identity(self) -> bool {
        self.dh == 0 && self.ds == 0 && self.dl == 0
    }

    /// Apply the offset: hue wraps modulo 360, saturation and lightness clamp.
    #[must_use]
    pub fn apply(self, base: Hsl) -> Hsl {
        Hsl::new(
            i32::from(base.h) + self.dh,
            base.s + f64::from(self.ds),
            base.l + f64::from(self.dl),
        )
    }
}

/// Primary brand palette: from near-black to near-white around the seed.
pub const PRIMARY_OFFSETS: [SwatchOffset; SWATCH_COUNT] = [
    SwatchOffset::new("Rich Black", -5, -20, -40),
    SwatchOffset::new("Dark Green", -3, -15, -30),
    SwatchOffset::new("Bangladesh Green", 0, -10, -20),
    SwatchOffset::new("Mountain Meadow", 0, 0, 0),
    SwatchOffset::new("Caribbean Green", 5, 10, 20),
    SwatchOffset::new("Anti-Flash White", 10, -80, 40),
];

/// Secondary brand palette: a tighter spread with a pale tint at the end.
pub const SECONDARY_OFFSETS: [SwatchOffset; SWATCH_COUNT] = [
    SwatchOffset::new("Pine", -5, -10, -10),
    SwatchOffset::new("Basil", -3, -5, -5),
    SwatchOffset::new("Forest", 0, 0, 0),
    SwatchOffset::new("Frog", 5, 10, 10),
    SwatchOffset::new("Mint", 10, 15, 15),
    SwatchOffset::new("Light Mint", 15, -40, 30),
];

// ---------------------------------------------------------------------------
// PaletteKind
// ---------------------------------------------------------------------------

/// Which of the two brand palettes is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    Primary,
    Secondary,
}

impl PaletteKind {
    /// Both kinds, primary first.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];

    /// The offset table this palette is derived with.
    #[must_use]
    pub const fn offsets(self) -> &'static [SwatchOffset; SWATCH_COUNT] {
        match self {
            Self::Primary => &PRIMARY_OFFSETS,
            Self::Secondary => &SECONDARY_OFFSETS,
        }
    }

    /// Index of the identity offset — the swatch that reproduces the seed.
    #[must_use]
    pub const fn seed_index(self) -> usize {
        match self {
            Self::Primary => 3,
            Self::Secondary => 2,
        }
    }

    /// Machine name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Heading shown above the swatch grid.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Primary => "Primary Colors",
            Self::Secondary => "Secondary Colors",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A palette name other than `primary` or `secondary`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette {0:?} (expected \"primary\" or \"secondary\")")]
pub struct UnknownPaletteError(pub String);

impl FromStr for PaletteKind {
    type Err = UnknownPaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("primary") {
            Ok(Self::Primary)
        } else if name.eq_ignore_ascii_case("secondary") {
            Ok(Self::Secondary)
        } else {
            Err(UnknownPaletteError(name.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_unique_within_each_table() {
        for kind in PaletteKind::ALL {
            let names: HashSet<_> = kind.offsets().iter().map(|o| o.name).collect();
            assert_eq!(names.len(), SWATCH_COUNT, "duplicate name in {kind}");
        }
    }

    #[test]
    fn seed_index_points_at_identity() {
        for kind in PaletteKind::ALL {
            let table = kind.offsets();
            assert!(table[kind.seed_index()].is_identity(), "{kind}");
            let identities = table.iter().filter(|o| o.is_identity()).count();
            assert_eq!(identities, 1, "{kind} should have exactly one identity offset");
        }
    }

    #[test]
    fn apply_wraps_hue_below_zero() {
        let base = Hsl::new(2, 50.0, 50.0);
        assert_eq!(PRIMARY_OFFSETS[0].apply(base).h, 357);
    }

    #[test]
    fn apply_wraps_hue_above_360() {
        let base = Hsl::new(355, 50.0, 50.0);
        assert_eq!(SECONDARY_OFFSETS[5].apply(base).h, 10);
    }

    #[test]
    fn apply_clamps_saturation_and_lightness() {
        let dark = PRIMARY_OFFSETS[0].apply(Hsl::new(0, 10.0, 20.0));
        assert!(dark.s.abs() < f64::EPSILON);
        assert!(dark.l.abs() < f64::EPSILON);

        let light = PRIMARY_OFFSETS[4].apply(Hsl::new(0, 95.0, 90.0));
        assert!((light.s - 100.0).abs() < f64::EPSILON);
        assert!((light.l - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("primary".parse(), Ok(PaletteKind::Primary));
        assert_eq!(" Secondary ".parse(), Ok(PaletteKind::Secondary));
        assert_eq!("SECONDARY".parse(), Ok(PaletteKind::Secondary));
    }

    #[test]
    fn kind_rejects_unknown() {
        let err = "tertiary".parse::<PaletteKind>().unwrap_err();
        assert_eq!(err, UnknownPaletteError("tertiary".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown palette \"tertiary\" (expected \"primary\" or \"secondary\")"
        );
    }

    #[test]
    fn kind_display_roundtrips() {
        for kind in PaletteKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn default_kind_is_primary() {
        assert_eq!(PaletteKind::default(), PaletteKind::Primary);
        assert_eq!(PaletteKind::Primary.title(), "Primary Colors");
        assert_eq!(PaletteKind::Secondary.title(), "Secondary Colors");
    }
}
