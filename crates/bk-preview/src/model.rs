//! Preview model — the single record of questionnaire choices and the
//! palettes derived from it.
//!
//! All mutation goes through the setters below. Seed setters rederive
//! their palette immediately; every other setter only touches state, and
//! the view ([`PreviewModel::view`]) is recomputed from scratch on demand.
//! Nothing here can fail: malformed colors become `#000000`.
//!
//! # Selection
//!
//! `selected_swatch` starts as the active palette's seed and only ever
//! moves to a member of the active palette; other colors are ignored.
//! Whenever a seed change or a palette switch leaves it outside the active
//! palette, it resets to that palette's identity swatch, so the example
//! card always shows a color the user can see in the grid.

use bk_color::HexColor;
use bk_palette::{ContrastMode, Palette, PaletteKind, Swatch, UnknownPaletteError};
use tracing::{debug, trace, warn};

use crate::font::DEFAULT_FONT;

/// Default primary brand color (Mountain Meadow).
pub const DEFAULT_PRIMARY: HexColor = HexColor::rgb(0x2c, 0xc2, 0x95);
/// Default secondary brand color (Forest).
pub const DEFAULT_SECONDARY: HexColor = HexColor::rgb(0x09, 0x55, 0x44);
/// Default body text color.
pub const DEFAULT_TEXT: HexColor = HexColor::rgb(0x33, 0x33, 0x33);

// ---------------------------------------------------------------------------
// Color input
// ---------------------------------------------------------------------------

/// Anything a setter accepts as a color: a parsed [`HexColor`], or a string
/// straight from a color picker (coerced to black when malformed).
pub trait ColorInput {
    fn into_color(self) -> HexColor;
}

impl ColorInput for HexColor {
    fn into_color(self) -> HexColor {
        self
    }
}

impl ColorInput for &str {
    fn into_color(self) -> HexColor {
        HexColor::parse_or_black(self)
    }
}

impl ColorInput for &String {
    fn into_color(self) -> HexColor {
        HexColor::parse_or_black(self)
    }
}

// ---------------------------------------------------------------------------
// PreviewDefaults
// ---------------------------------------------------------------------------

/// Initial choices for a fresh preview.
///
/// `Default` gives the questionnaire's out-of-the-box brand:
/// `#2CC295` / `#095544`, `#333333` text, Arial, primary palette active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDefaults {
    pub primary_seed: HexColor,
    pub secondary_seed: HexColor,
    pub text_color: HexColor,
    pub font: String,
    pub active_palette: PaletteKind,
    pub contrast: ContrastMode,
}

impl Default for PreviewDefaults {
    fn default() -> Self {
        Self {
            primary_seed: DEFAULT_PRIMARY,
            secondary_seed: DEFAULT_SECONDARY,
            text_color: DEFAULT_TEXT,
            font: DEFAULT_FONT.to_string(),
            active_palette: PaletteKind::Primary,
            contrast: ContrastMode::Brightness,
        }
    }
}

// ---------------------------------------------------------------------------
// PreviewState
// ---------------------------------------------------------------------------

/// The user's current choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    pub primary_seed: HexColor,
    pub secondary_seed: HexColor,
    pub text_color: HexColor,
    /// CSS `font-family` stack.
    pub font: String,
    pub active_palette: PaletteKind,
    /// Background of the example card.
    pub selected_swatch: HexColor,
}

impl PreviewState {
    fn from_defaults(defaults: &PreviewDefaults) -> Self {
        let selected_swatch = match defaults.active_palette {
            PaletteKind::Primary => defaults.primary_seed,
            PaletteKind::Secondary => defaults.secondary_seed,
        };
        Self {
            primary_seed: defaults.primary_seed,
            secondary_seed: defaults.secondary_seed,
            text_color: defaults.text_color,
            font: defaults.font.clone(),
            active_palette: defaults.active_palette,
            selected_swatch,
        }
    }
}

// ---------------------------------------------------------------------------
// PreviewModel
// ---------------------------------------------------------------------------

/// Reactive branding preview: state plus both derived palettes.
#[derive(Debug, Clone)]
pub struct PreviewModel {
    defaults: PreviewDefaults,
    state: PreviewState,
    primary: Palette,
    secondary: Palette,
    contrast: ContrastMode,
}

impl Default for PreviewModel {
    fn default() -> Self {
        Self::new(PreviewDefaults::default())
    }
}

impl PreviewModel {
    /// Create a preview from initial choices.
    #[must_use]
    pub fn new(defaults: PreviewDefaults) -> Self {
        let state = PreviewState::from_defaults(&defaults);
        let primary = Palette::derive(state.primary_seed, PaletteKind::Primary);
        let secondary = Palette::derive(state.secondary_seed, PaletteKind::Secondary);
        let contrast = defaults.contrast;
        debug!(
            primary = %state.primary_seed,
            secondary = %state.secondary_seed,
            active = %state.active_palette,
            "preview created"
        );
        Self {
            defaults,
            state,
            primary,
            secondary,
            contrast,
        }
    }

    // ── Getters ─────────────────────────────────────────────────────────

    #[must_use]
    pub const fn state(&self) -> &PreviewState {
        &self.state
    }

    #[must_use]
    pub const fn defaults(&self) -> &PreviewDefaults {
        &self.defaults
    }

    #[must_use]
    pub const fn primary_palette(&self) -> &Palette {
        &self.primary
    }

    #[must_use]
    pub const fn secondary_palette(&self) -> &Palette {
        &self.secondary
    }

    #[must_use]
    pub const fn palette(&self, kind: PaletteKind) -> &Palette {
        match kind {
            PaletteKind::Primary => &self.primary,
            PaletteKind::Secondary => &self.secondary,
        }
    }

    /// The palette currently shown in the grid.
    #[must_use]
    pub const fn active_palette(&self) -> &Palette {
        self.palette(self.state.active_palette)
    }

    /// Regular / medium / semibold typography backgrounds from the active
    /// palette (indices 2, 0, 4).
    #[must_use]
    pub fn typography_anchors(&self) -> [Swatch; 3] {
        self.active_palette().typography_anchors()
    }

    #[must_use]
    pub const fn contrast_mode(&self) -> ContrastMode {
        self.contrast
    }

    /// Label color for `bg`: auto contrast without `user_text`, prefer or
    /// override with it, under the preview's contrast mode.
    #[must_use]
    pub fn contrast_for(&self, bg: HexColor, user_text: Option<HexColor>) -> HexColor {
        self.contrast.contrast_for(bg, user_text)
    }

    // ── Setters ─────────────────────────────────────────────────────────

    /// Change the primary seed and rederive the primary palette.
    pub fn set_primary_seed(&mut self, hex: impl ColorInput) {
        let hex = hex.into_color();
        self.state.primary_seed = hex;
        self.primary = Palette::derive(hex, PaletteKind::Primary);
        debug!(seed = %hex, "primary palette rederived");
        self.reconcile_selection();
    }

    /// Change the secondary seed and rederive the secondary palette.
    pub fn set_secondary_seed(&mut self, hex: impl ColorInput) {
        let hex = hex.into_color();
        self.state.secondary_seed = hex;
        self.secondary = Palette::derive(hex, PaletteKind::Secondary);
        debug!(seed = %hex, "secondary palette rederived");
        self.reconcile_selection();
    }

    /// Change the preferred text color. Palettes are untouched.
    pub fn set_text_color(&mut self, hex: impl ColorInput) {
        self.state.text_color = hex.into_color();
        trace!(text = %self.state.text_color, "text color set");
    }

    /// Change the font stack. Palettes are untouched.
    pub fn set_font(&mut self, font: impl Into<String>) {
        self.state.font = font.into();
        trace!(font = %self.state.font, "font set");
    }

    /// Switch which palette supplies the grid and the typography anchors.
    pub fn set_active_palette(&mut self, kind: PaletteKind) {
        self.state.active_palette = kind;
        debug!(active = %kind, "active palette switched");
        self.reconcile_selection();
    }

    /// [`PreviewModel::set_active_palette`] by name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPaletteError`] for names other than `primary` /
    /// `secondary`; the state is left unchanged.
    pub fn set_active_palette_named(&mut self, name: &str) -> Result<(), UnknownPaletteError> {
        match name.parse() {
            Ok(kind) => {
                self.set_active_palette(kind);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "palette switch ignored");
                Err(err)
            }
        }
    }

    /// Use `hex` as the example card background.
    ///
    /// Only members of the active palette are accepted. Any other color is
    /// ignored with a warning and `false` is returned. Selection never
    /// rederives a palette.
    pub fn select_swatch(&mut self, hex: impl ColorInput) -> bool {
        let hex = hex.into_color();
        if !self.active_palette().contains(hex) {
            warn!(
                color = %hex,
                active = %self.state.active_palette,
                "selection outside active palette ignored"
            );
            return false;
        }
        self.state.selected_swatch = hex;
        trace!(selected = %hex, "swatch selected");
        true
    }

    /// Select the active palette's swatch at grid position `index`.
    ///
    /// Returns the selected color, or `None` (and changes nothing) when
    /// `index` is past the end of the grid.
    pub fn select_swatch_at(&mut self, index: usize) -> Option<HexColor> {
        let hex = self.active_palette().get(index)?.hex;
        self.state.selected_swatch = hex;
        trace!(selected = %hex, index, "swatch selected");
        Some(hex)
    }

    /// Switch the legibility measure used for swatch labels.
    pub const fn set_contrast_mode(&mut self, mode: ContrastMode) {
        self.contrast = mode;
    }

    /// Restore the initial choices.
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults.clone());
    }

    fn reconcile_selection(&mut self) {
        let active = self.active_palette();
        if !active.contains(self.state.selected_swatch) {
            let fallback = active.seed_swatch().hex;
            debug!(
                stale = %self.state.selected_swatch,
                selected = %fallback,
                "selection outside active palette, reset to seed swatch"
            );
            self.state.selected_swatch = fallback;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
