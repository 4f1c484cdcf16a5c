// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation for previewing colors in a terminal.
//
// Pure functions that write SGR sequences to any `impl Write`. No state,
// no decisions about when to emit — the caller decides what a tile looks
// like, this module just knows the byte-level encoding.
//
// Brand colors are always 24-bit, so there is no 16/256-color fallback:
// every color goes out as `38;2;R;G;B` / `48;2;R;G;B`.
use std::io::{self, Write};

use crate::color::HexColor;

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters.
    /// Combine with bitwise OR:
    ///
    /// ```
    /// use bk_color::ansi::Attr;
    ///
    /// let style = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM       = 1 << 1;
        /// SGR 3 — italic or oblique.
        const ITALIC    = 1 << 2;
        /// SGR 4 — single underline.
        const UNDERLINE = 1 << 3;
    }
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set the foreground (text) color as 24-bit `TrueColor`.
#[inline]
pub fn fg(w: &mut impl Write, color: HexColor) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Set the background color as 24-bit `TrueColor`.
#[inline]
pub fn bg(w: &mut impl Write, color: HexColor) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;4m` for
/// bold + underline. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = [
        (Attr::BOLD, "1"),
        (Attr::DIM, "2"),
        (Attr::ITALIC, "3"),
        (Attr::UNDERLINE, "4"),
    ]
    .into_iter()
    .filter(|(flag, _)| attr.contains(*flag))
    .map(|(_, code)| code)
    .collect();

    write!(w, "\x1b[{}m", codes.join(";"))
}

/// Write `text` with the given colors and attributes, then reset.
///
/// The reset keeps a tile's background from bleeding into the padding
/// that follows it on the same line.
pub fn styled(
    w: &mut impl Write,
    text: &str,
    foreground: HexColor,
    background: HexColor,
    attr: Attr,
) -> io::Result<()> {
    bg(w, background)?;
    fg(w, foreground)?;
    attrs(w, attr)?;
    w.write_all(text.as_bytes())?;
    reset(w)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
