// SPDX-License-Identifier: MIT
//
// Terminal rendering of a PreviewView.
//
// Every block is a fixed-width tile painted with 24-bit colors through
// bk_color::ansi. Plain mode writes the same text without escapes, so the
// layout is identical with and without color.
//
//   Primary Colors
//
//   Typography
//    Aa  Regular                       Bangladesh Green
//    Ff  Medium                        Rich Black
//    Xx  Semi Bold                     Caribbean Green
//
//   Swatches
//     Rich Black         HEX: #0A1813
//     ...
//   ▸ Mountain Meadow    HEX: #2CC295
//
//   Example Card
//    Your Brand
//    ──────────
//    ...
//
//   Font: Arial  The quick brown fox jumps over the lazy dog

use std::io::{self, Write};

use bk_color::HexColor;
use bk_color::ansi::{self, Attr};
use bk_preview::{ExampleCard, FontSample, PreviewView, SwatchTile, TypeWeight, TypographyTile};
use unicode_width::UnicodeWidthStr;

/// Columns taken by a typography or swatch tile.
const TILE_WIDTH: usize = 34;

/// Columns reserved for the swatch name inside a tile.
const NAME_WIDTH: usize = 18;

/// Columns taken by the example card.
const CARD_WIDTH: usize = 40;

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

/// Marker in front of the swatch used as card background.
const SELECTED_MARKER: &str = "▸";

// ─── Style ──────────────────────────────────────────────────────────────────

/// Whether escapes are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// 24-bit foreground/background plus weight attributes.
    Color,
    /// Text only.
    Plain,
}

/// Terminal stand-in for a font weight.
#[must_use]
pub const fn weight_attr(weight: TypeWeight) -> Attr {
    match weight {
        TypeWeight::Regular => Attr::empty(),
        TypeWeight::Medium => Attr::BOLD,
        TypeWeight::SemiBold => Attr::BOLD.union(Attr::UNDERLINE),
    }
}

/// Left-align `text` in `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

// ─── Renderer ───────────────────────────────────────────────────────────────

/// Writes a [`PreviewView`] to any output.
pub struct Renderer<W: Write> {
    out: W,
    style: Style,
}

impl<W: Write> Renderer<W> {
    pub const fn new(out: W, style: Style) -> Self {
        Self { out, style }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render the whole preview and flush.
    pub fn render(&mut self, view: &PreviewView) -> io::Result<()> {
        self.heading(view.title)?;
        writeln!(self.out)?;

        self.heading("Typography")?;
        for tile in &view.typography {
            self.typography_tile(tile)?;
        }
        writeln!(self.out)?;

        self.heading("Swatches")?;
        for tile in &view.swatches {
            self.swatch_tile(tile)?;
        }
        writeln!(self.out)?;

        self.heading("Example Card")?;
        self.card(&view.card)?;
        writeln!(self.out)?;

        self.font_sample(&view.font_sample)?;
        self.out.flush()
    }

    // ── Blocks ──────────────────────────────────────────────────────────

    fn heading(&mut self, text: &str) -> io::Result<()> {
        match self.style {
            Style::Color => {
                ansi::attrs(&mut self.out, Attr::BOLD)?;
                self.out.write_all(text.as_bytes())?;
                ansi::reset(&mut self.out)?;
            }
            Style::Plain => self.out.write_all(text.as_bytes())?,
        }
        writeln!(self.out)
    }

    fn typography_tile(&mut self, tile: &TypographyTile) -> io::Result<()> {
        let text = format!(" {}  {}", tile.weight.glyphs(), tile.weight.label());
        write!(self.out, " ")?;
        self.tile(&text, TILE_WIDTH, tile.foreground, tile.swatch.hex, weight_attr(tile.weight))?;
        writeln!(self.out, "  {}", tile.swatch.name)
    }

    fn swatch_tile(&mut self, tile: &SwatchTile) -> io::Result<()> {
        let marker = if tile.selected { SELECTED_MARKER } else { " " };
        let text = format!(" {} HEX: {:X}", pad(tile.swatch.name, NAME_WIDTH), tile.swatch.hex);
        write!(self.out, "{marker} ")?;
        self.tile(&text, TILE_WIDTH, tile.label, tile.swatch.hex, Attr::empty())?;
        writeln!(self.out)
    }

    fn card(&mut self, card: &ExampleCard) -> io::Result<()> {
        let divider = format!(" {}", "─".repeat(CARD_WIDTH - 2));
        let body = format!(" Example post set in {}", bk_preview::font::display_name(&card.font));
        let footer = format!(" Background {:X}", card.background);

        let lines = [
            (" Your Brand".to_string(), card.header, Attr::BOLD),
            (divider, card.header, Attr::empty()),
            (body, card.foreground, Attr::empty()),
            (footer, card.foreground, Attr::DIM),
        ];
        for (text, fg, attr) in &lines {
            write!(self.out, " ")?;
            self.tile(text, CARD_WIDTH, *fg, card.background, *attr)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn font_sample(&mut self, sample: &FontSample) -> io::Result<()> {
        write!(self.out, "Font: {}  ", sample.font_name)?;
        match self.style {
            Style::Color => {
                ansi::fg(&mut self.out, sample.color)?;
                self.out.write_all(PANGRAM.as_bytes())?;
                ansi::reset(&mut self.out)?;
            }
            Style::Plain => self.out.write_all(PANGRAM.as_bytes())?,
        }
        writeln!(self.out)
    }

    // ── Primitive ───────────────────────────────────────────────────────

    fn tile(
        &mut self,
        text: &str,
        width: usize,
        foreground: HexColor,
        background: HexColor,
        attr: Attr,
    ) -> io::Result<()> {
        let text = pad(text, width);
        match self.style {
            Style::Color => ansi::styled(&mut self.out, &text, foreground, background, attr),
            Style::Plain => self.out.write_all(text.as_bytes()),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
