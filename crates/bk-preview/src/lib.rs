//! # bk-preview — Branding preview state for brandkit
//!
//! Holds the questionnaire's color and font choices and turns them into
//! plain view data:
//!
//! - **[`model`]** — `PreviewModel`: state, setters, both derived palettes
//! - **[`view`]** — `PreviewView`: typography tiles, swatch grid, example card
//! - **[`command`]** — one-line directives that drive the setters
//! - **[`font`]** — the font catalog offered by the picker
//!
//! Data flows one way: setters → palettes → view. Presentation binds to a
//! `PreviewView` and reports clicks back through the setters, never by
//! editing view data.

pub mod command;
pub mod font;
pub mod model;
pub mod view;

pub use command::{CommandError, Directive, parse_directive};
pub use model::{ColorInput, PreviewDefaults, PreviewModel, PreviewState};
pub use view::{ExampleCard, FontSample, PreviewView, SwatchTile, TypeWeight, TypographyTile};
