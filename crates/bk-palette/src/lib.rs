//! # bk-palette — Brand palette derivation and contrast engine
//!
//! Turns a user-chosen seed color into a named six-swatch palette whose
//! members keep a fixed perceptual relationship to the seed, and decides
//! which text color stays legible on each swatch.
//!
//! # Architecture
//!
//! ```text
//! seed HexColor + PaletteKind
//!     │
//!     ▼
//! offsets.rs:  pick the fixed (dH, dS, dL) table for the kind
//!     │
//!     ▼
//! palette.rs:  seed → HSL → apply each offset → hex → six Swatches
//!     │
//!     ▼
//! contrast.rs: per swatch, keep the user's text color or fall back
//!              to black/white (brightness gap > 125)
//! ```
//!
//! Everything is pure: same seed, same palette, every time.

// Hue/saturation/lightness deltas are named dh/ds/dl by convention.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod offsets;
pub mod palette;

pub use contrast::{ContrastMode, auto_contrast, contrast_for, prefer_or_override};
pub use offsets::{PaletteKind, SwatchOffset, UnknownPaletteError};
pub use palette::{Palette, Swatch};
