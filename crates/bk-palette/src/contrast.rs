//! Contrast policy — which foreground color goes on a swatch.
//!
//! Two rules, both in perceived-brightness space (Rec.601 weights):
//!
//! - **Auto contrast:** black text on backgrounds brighter than 0.5,
//!   white text otherwise.
//! - **Prefer or override:** keep the user's text color when its brightness
//!   differs from the background by more than 125 on the 0–255 scale,
//!   otherwise fall back to auto contrast.
//!
//! A palette spans near-black to near-white, so no single user color can
//! be legible on every swatch. The policy overrides silently instead of
//! failing.
//!
//! [`ContrastMode::Wcag`] swaps the brightness heuristic for WCAG 2.1
//! relative luminance and a 4.5:1 ratio. It is opt-in; the default mode
//! reproduces the brightness rules above exactly.

use bk_color::HexColor;
use bk_color::color::srgb_to_linear;

/// Minimum brightness gap (0–255 scale) for a user text color to be kept.
pub const BRIGHTNESS_THRESHOLD: f64 = 125.0;

/// Minimum WCAG contrast ratio for a user text color to be kept in
/// [`ContrastMode::Wcag`] (AA for normal text).
pub const WCAG_MIN_RATIO: f64 = 4.5;

// ---------------------------------------------------------------------------
// Brightness rules
// ---------------------------------------------------------------------------

/// Black or white, whichever reads better on `bg`.
#[must_use]
pub fn auto_contrast(bg: HexColor) -> HexColor {
    if bg.luminance() > 0.5 {
        HexColor::BLACK
    } else {
        HexColor::WHITE
    }
}

/// Brightness difference between two colors on the 0–255 scale.
#[must_use]
pub fn brightness_gap(a: HexColor, b: HexColor) -> f64 {
    (a.luminance() - b.luminance()).abs() * 255.0
}

/// Keep `user_text` if it stands out from `bg`, otherwise auto contrast.
#[must_use]
pub fn prefer_or_override(bg: HexColor, user_text: HexColor) -> HexColor {
    if brightness_gap(bg, user_text) > BRIGHTNESS_THRESHOLD {
        user_text
    } else {
        auto_contrast(bg)
    }
}

/// String-level entry point for the presentation layer.
///
/// Without `user_text` this is [`auto_contrast`], with it
/// [`prefer_or_override`]. A malformed background yields `#000000`; a
/// malformed user color is read as black.
#[must_use]
pub fn contrast_for(bg: &str, user_text: Option<&str>) -> HexColor {
    ContrastMode::Brightness.contrast_for_str(bg, user_text)
}

// ---------------------------------------------------------------------------
// WCAG
// ---------------------------------------------------------------------------

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: HexColor) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// ContrastMode
// ---------------------------------------------------------------------------

/// Which legibility measure the policy uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContrastMode {
    /// Rec.601 perceived brightness with the 125 gap. The default.
    #[default]
    Brightness,
    /// WCAG 2.1 relative luminance with a 4.5:1 ratio.
    Wcag,
}

impl ContrastMode {
    /// Black or white for `bg` under this mode.
    #[must_use]
    pub fn auto(self, bg: HexColor) -> HexColor {
        match self {
            Self::Brightness => auto_contrast(bg),
            Self::Wcag => {
                if contrast_ratio(bg, HexColor::BLACK) >= contrast_ratio(bg, HexColor::WHITE) {
                    HexColor::BLACK
                } else {
                    HexColor::WHITE
                }
            }
        }
    }

    /// Whether `fg` is legible enough on `bg` to keep.
    #[must_use]
    pub fn is_legible(self, bg: HexColor, fg: HexColor) -> bool {
        match self {
            Self::Brightness => brightness_gap(bg, fg) > BRIGHTNESS_THRESHOLD,
            Self::Wcag => contrast_ratio(bg, fg) >= WCAG_MIN_RATIO,
        }
    }

    /// Keep `user_text` when legible, otherwise [`ContrastMode::auto`].
    #[must_use]
    pub fn prefer_or_override(self, bg: HexColor, user_text: HexColor) -> HexColor {
        if self.is_legible(bg, user_text) {
            user_text
        } else {
            self.auto(bg)
        }
    }

    /// Label color for a swatch: auto contrast, or the user's preference
    /// when one is given.
    #[must_use]
    pub fn contrast_for(self, bg: HexColor, user_text: Option<HexColor>) -> HexColor {
        user_text.map_or_else(|| self.auto(bg), |text| self.prefer_or_override(bg, text))
    }

    /// [`ContrastMode::contrast_for`] over unparsed strings.
    #[must_use]
    pub fn contrast_for_str(self, bg: &str, user_text: Option<&str>) -> HexColor {
        let Some(bg) = HexColor::parse(bg) else {
            return HexColor::BLACK;
        };
        self.contrast_for(bg, user_text.map(HexColor::parse_or_black))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
