//! Preview directives — one-line commands that drive the setters.
//!
//! Used by the interactive terminal preview, and handy in tests for
//! scripting a sequence of user choices.
//!
//! # Syntax
//!
//! The keyword and its argument are separated by whitespace or `=`.
//!
//! | Directive                 | Effect                               |
//! |---------------------------|--------------------------------------|
//! | `primary #2CC295`         | Set the primary seed                 |
//! | `secondary #095544`       | Set the secondary seed               |
//! | `text #333`               | Set the preferred text color         |
//! | `font Georgia`            | Set the font (catalog name or stack) |
//! | `palette secondary`       | Switch the active palette            |
//! | `select 3`                | Select grid swatch 3 (1-based)       |
//! | `select #6CE8CD`          | Select a grid swatch by color        |
//! | `reset`                   | Restore the initial choices          |
//!
//! Unlike the setters, directives parse colors strictly: a typo is
//! reported instead of silently turning the palette black.

use bk_color::{HexColor, ParseHexError};
use bk_palette::offsets::SWATCH_COUNT;
use bk_palette::{PaletteKind, UnknownPaletteError};
use thiserror::Error;

use crate::font;
use crate::model::PreviewModel;

/// A parsed preview directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Primary(HexColor),
    Secondary(HexColor),
    Text(HexColor),
    /// CSS font stack (catalog names are already resolved).
    Font(String),
    Palette(PaletteKind),
    Select(Selection),
    Reset,
}

/// What `select` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based grid index into the active palette.
    Index(usize),
    Color(HexColor),
}

/// Why a directive line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?}")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid color: {0}")]
    Color(#[from] ParseHexError),

    #[error(transparent)]
    Palette(#[from] UnknownPaletteError),

    #[error("swatch {0} out of range (1-{max})", max = SWATCH_COUNT)]
    SwatchOutOfRange(usize),

    #[error("{0} is not in the active palette")]
    NotInPalette(HexColor),
}

/// Parse one directive line.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown keywords, missing arguments,
/// malformed colors, unknown palettes and out-of-range swatch numbers.
pub fn parse_directive(line: &str) -> Result<Directive, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (keyword, arg) = line
        .split_once(|c: char| c.is_whitespace() || c == '=')
        .map_or((line, ""), |(keyword, arg)| (keyword, arg.trim()));

    let keyword = keyword.to_ascii_lowercase();
    let require = |name: &'static str| {
        if arg.is_empty() {
            Err(CommandError::MissingArgument(name))
        } else {
            Ok(arg)
        }
    };

    match keyword.as_str() {
        "primary" => Ok(Directive::Primary(require("primary")?.parse()?)),
        "secondary" => Ok(Directive::Secondary(require("secondary")?.parse()?)),
        "text" => Ok(Directive::Text(require("text")?.parse()?)),
        "font" => {
            let arg = require("font")?;
            let stack = font::lookup(arg).map_or_else(|| arg.to_string(), |f| f.stack.to_string());
            Ok(Directive::Font(stack))
        }
        "palette" => Ok(Directive::Palette(require("palette")?.parse()?)),
        "select" => parse_selection(require("select")?).map(Directive::Select),
        "reset" => Ok(Directive::Reset),
        _ => Err(CommandError::Unknown(keyword)),
    }
}

fn parse_selection(arg: &str) -> Result<Selection, CommandError> {
    if let Ok(n) = arg.parse::<usize>() {
        return if (1..=SWATCH_COUNT).contains(&n) {
            Ok(Selection::Index(n - 1))
        } else {
            Err(CommandError::SwatchOutOfRange(n))
        };
    }
    Ok(Selection::Color(arg.parse()?))
}

impl PreviewModel {
    /// Apply a parsed directive through the matching setter.
    ///
    /// # Errors
    ///
    /// Selections outside the active palette are refused and the model is
    /// left unchanged.
    pub fn apply(&mut self, directive: Directive) -> Result<(), CommandError> {
        match directive {
            Directive::Primary(hex) => self.set_primary_seed(hex),
            Directive::Secondary(hex) => self.set_secondary_seed(hex),
            Directive::Text(hex) => self.set_text_color(hex),
            Directive::Font(stack) => self.set_font(stack),
            Directive::Palette(kind) => self.set_active_palette(kind),
            Directive::Select(Selection::Index(i)) => {
                self.select_swatch_at(i).ok_or(CommandError::SwatchOutOfRange(i + 1))?;
            }
            Directive::Select(Selection::Color(hex)) => {
                if !self.select_swatch(hex) {
                    return Err(CommandError::NotInPalette(hex));
                }
            }
            Directive::Reset => self.reset(),
        }
        Ok(())
    }

    /// Parse and apply one directive line.
    ///
    /// # Errors
    ///
    /// Returns the parse or apply error; the model is left unchanged.
    pub fn run(&mut self, line: &str) -> Result<(), CommandError> {
        self.apply(parse_directive(line)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
