// SPDX-License-Identifier: MIT
//
// bk-color — color space primitives for brandkit.
//
// Converts between the `#RRGGBB` strings a color picker produces and the
// HSL triples palette derivation works in, measures perceived brightness
// for the contrast policy, and encodes colors as truecolor ANSI escapes for
// the terminal preview. Everything here is pure and total: malformed input
// degrades to black instead of failing.

pub mod ansi;
pub mod color;

pub use color::{HexColor, Hsl, ParseHexError, hex_to_hsl, hsl_to_hex, luminance};
