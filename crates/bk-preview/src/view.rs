//! Derived view data — everything the presentation layer binds to.
//!
//! A [`PreviewView`] is a plain snapshot computed from a [`PreviewModel`].
//! Presentation reads colors from it and never writes back; all changes go
//! through the model's setters and a fresh view is taken afterwards.

use bk_color::HexColor;
use bk_palette::{PaletteKind, Swatch};

use crate::font;
use crate::model::PreviewModel;

/// Weight a typography tile demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeWeight {
    Regular,
    Medium,
    SemiBold,
}

impl TypeWeight {
    /// Order matches the typography anchors (palette indices 2, 0, 4).
    pub const ALL: [Self; 3] = [Self::Regular, Self::Medium, Self::SemiBold];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::SemiBold => "Semi Bold",
        }
    }

    /// Sample glyphs shown large on the tile.
    #[must_use]
    pub const fn glyphs(self) -> &'static str {
        match self {
            Self::Regular => "Aa",
            Self::Medium => "Ff",
            Self::SemiBold => "Xx",
        }
    }
}

/// One Aa / Ff / Xx tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypographyTile {
    pub weight: TypeWeight,
    pub swatch: Swatch,
    /// Always black or white: auto contrast against the swatch.
    pub foreground: HexColor,
}

/// One entry of the color grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchTile {
    pub swatch: Swatch,
    /// The user's text color when legible on this swatch, else black/white.
    pub label: HexColor,
    /// Whether this swatch is the example card background.
    pub selected: bool,
}

/// The example social-media post card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCard {
    /// The selected swatch.
    pub background: HexColor,
    /// Auto contrast against `background`; the card body is small enough
    /// that the user's text color is never tried.
    pub foreground: HexColor,
    /// The primary brand seed.
    pub accent: HexColor,
    /// Header text and divider color: `accent` when legible on
    /// `background`, otherwise black or white.
    pub header: HexColor,
    pub font: String,
}

/// Free-standing font sample in the user's text color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSample {
    pub font: String,
    /// Short name of `font` for display.
    pub font_name: String,
    pub color: HexColor,
}

/// Snapshot of everything the preview shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub palette: PaletteKind,
    /// Heading above the grid ("Primary Colors" / "Secondary Colors").
    pub title: &'static str,
    pub typography: [TypographyTile; 3],
    pub swatches: Vec<SwatchTile>,
    pub card: ExampleCard,
    pub font_sample: FontSample,
}

impl PreviewView {
    /// Compute the view for the model's current state.
    #[must_use]
    pub fn from_model(model: &PreviewModel) -> Self {
        let state = model.state();
        let mode = model.contrast_mode();
        let palette = model.active_palette();

        let anchors = palette.typography_anchors();
        let typography = [0, 1, 2].map(|i| TypographyTile {
            weight: TypeWeight::ALL[i],
            swatch: anchors[i],
            foreground: mode.auto(anchors[i].hex),
        });

        let swatches = palette
            .iter()
            .map(|swatch| SwatchTile {
                swatch: *swatch,
                label: mode.prefer_or_override(swatch.hex, state.text_color),
                selected: swatch.hex == state.selected_swatch,
            })
            .collect();

        let card = ExampleCard {
            background: state.selected_swatch,
            foreground: mode.auto(state.selected_swatch),
            accent: state.primary_seed,
            header: mode.prefer_or_override(state.selected_swatch, state.primary_seed),
            font: state.font.clone(),
        };

        let font_sample = FontSample {
            font: state.font.clone(),
            font_name: font::display_name(&state.font).to_string(),
            color: state.text_color,
        };

        Self {
            palette: state.active_palette,
            title: state.active_palette.title(),
            typography,
            swatches,
            card,
            font_sample,
        }
    }
}

impl PreviewModel {
    /// Derive the current [`PreviewView`].
    #[must_use]
    pub fn view(&self) -> PreviewView {
        PreviewView::from_model(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bk_palette::ContrastMode;
    use bk_palette::contrast::{BRIGHTNESS_THRESHOLD, brightness_gap};
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn default_view_uses_primary_palette() {
        let view = PreviewModel::default().view();
        assert_eq!(view.palette, PaletteKind::Primary);
        assert_eq!(view.title, "Primary Colors");
        assert_eq!(view.swatches.len(), 6);
        assert_eq!(view.swatches[0].swatch.name, "Rich Black");
    }

    #[test]
    fn typography_tiles_follow_anchor_order() {
        let view = PreviewModel::default().view();
        let names: Vec<_> = view.typography.iter().map(|t| t.swatch.name).collect();
        assert_eq!(names, ["Bangladesh Green", "Rich Black", "Caribbean Green"]);
        let glyphs: Vec<_> = view.typography.iter().map(|t| t.weight.glyphs()).collect();
        assert_eq!(glyphs, ["Aa", "Ff", "Xx"]);
    }

    #[test]
    fn typography_foreground_is_auto_contrast() {
        let view = PreviewModel::default().view();
        // Bangladesh Green and Rich Black are dark, Caribbean Green is light.
        assert_eq!(view.typography[0].foreground, HexColor::WHITE);
        assert_eq!(view.typography[1].foreground, HexColor::WHITE);
        assert_eq!(view.typography[2].foreground, HexColor::BLACK);
    }

    #[test]
    fn secondary_aa_tile_is_forest_with_white_text() {
        let mut model = PreviewModel::default();
        model.set_active_palette(PaletteKind::Secondary);
        let view = model.view();
        let aa = view.typography[0];
        assert_eq!(aa.weight, TypeWeight::Regular);
        assert_eq!(aa.swatch.name, "Forest");
        assert_eq!(aa.swatch.hex, hex("#095544"));
        assert!(aa.swatch.hex.luminance() < 0.5);
        assert_eq!(aa.foreground, HexColor::WHITE);
        assert_eq!(view.title, "Secondary Colors");
    }

    #[test]
    fn swatch_labels_prefer_user_text_when_legible() {
        let view = PreviewModel::default().view();
        let user = hex("#333333");
        // Rich Black: dark on dark → overridden.
        assert_eq!(view.swatches[0].label, HexColor::WHITE);
        // Anti-Flash White (#dddddd): dark text is kept.
        assert_eq!(view.swatches[5].label, user);
    }

    #[test]
    fn every_label_is_legible() {
        let mut model = PreviewModel::default();
        for text in ["#333333", "#ffffff", "#000000", "#2cc295", "#808080"] {
            model.set_text_color(text);
            for kind in PaletteKind::ALL {
                model.set_active_palette(kind);
                for tile in model.view().swatches {
                    let gap = brightness_gap(tile.swatch.hex, tile.label);
                    assert!(gap > BRIGHTNESS_THRESHOLD, "{} on {}: {gap}", tile.label, tile.swatch.hex);
                }
            }
        }
    }

    #[test]
    fn selected_flag_marks_card_background() {
        let mut model = PreviewModel::default();
        model.select_swatch_at(2);
        let view = model.view();
        let selected: Vec<_> = view.swatches.iter().map(|t| t.selected).collect();
        assert_eq!(selected, [false, false, true, false, false, false]);
        assert_eq!(view.card.background, view.swatches[2].swatch.hex);
    }

    #[test]
    fn card_uses_auto_contrast_not_user_text() {
        let mut model = PreviewModel::default();
        model.set_text_color("#000000");
        model.select_swatch_at(0);
        let card = model.view().card;
        assert_eq!(card.background, hex("#0a1813"));
        assert_eq!(card.foreground, HexColor::WHITE);
        assert_eq!(card.accent, hex("#2CC295"));
        assert_eq!(card.font, "Arial, sans-serif");
    }

    #[test]
    fn card_header_keeps_brand_color_when_legible() {
        let mut model = PreviewModel::default();
        model.set_active_palette(PaletteKind::Secondary);
        model.set_secondary_seed("#000000");
        let card = model.view().card;
        assert_eq!(card.background, HexColor::BLACK);
        assert_eq!(card.header, hex("#2cc295"));
    }

    #[test]
    fn card_header_overrides_brand_color_on_itself() {
        let card = PreviewModel::default().view().card;
        assert_eq!(card.background, card.accent);
        assert_eq!(card.header, HexColor::BLACK);
        assert!(brightness_gap(card.background, card.header) > BRIGHTNESS_THRESHOLD);
    }

    #[test]
    fn font_sample_tracks_text_and_font() {
        let mut model = PreviewModel::default();
        model.set_font("'Courier New', monospace");
        model.set_text_color("#123456");
        let sample = model.view().font_sample;
        assert_eq!(sample.font, "'Courier New', monospace");
        assert_eq!(sample.font_name, "Courier New");
        assert_eq!(sample.color, hex("#123456"));
    }

    #[test]
    fn wcag_mode_changes_pure_red_tile() {
        let mut model = PreviewModel::default();
        model.set_primary_seed("#ff0000");
        model.set_text_color("#ffffff");

        // Brightness: red is dark (0.30) and white clears the gap (≈179).
        let view = model.view();
        assert_eq!(view.swatches[3].swatch.hex, hex("#ff0000"));
        assert_eq!(view.swatches[3].label, HexColor::WHITE);
        assert_eq!(view.card.foreground, HexColor::WHITE);

        // WCAG: white on red is only 4.0:1, black is 5.25:1.
        model.set_contrast_mode(ContrastMode::Wcag);
        let view = model.view();
        assert_eq!(view.swatches[3].label, HexColor::BLACK);
        assert_eq!(view.card.foreground, HexColor::BLACK);
    }

    #[test]
    fn view_is_recomputed_not_cached() {
        let mut model = PreviewModel::default();
        let before = model.view();
        model.set_primary_seed("#ff8800");
        let after = model.view();
        assert_ne!(before.swatches, after.swatches);
        assert_eq!(model.view(), after);
    }
}
