//! Font catalog — the typefaces the questionnaire offers.
//!
//! The preview stores the font as a CSS `font-family` stack string, so any
//! value is accepted. The catalog only maps between the short display names
//! a user types and those stacks.
//!
//! | Display name      | Stack                          |
//! |-------------------|--------------------------------|
//! | `Arial`           | `Arial, sans-serif`            |
//! | `Times New Roman` | `'Times New Roman', serif`     |
//! | `Courier New`     | `'Courier New', monospace`     |
//! | `Georgia`         | `'Georgia', serif`             |
//! | `Verdana`         | `'Verdana', sans-serif`        |

/// One selectable font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontChoice {
    /// Name shown in the picker.
    pub name: &'static str,
    /// CSS `font-family` value.
    pub stack: &'static str,
}

/// Every font the picker offers, default first.
pub const FONTS: [FontChoice; 5] = [
    FontChoice { name: "Arial", stack: "Arial, sans-serif" },
    FontChoice { name: "Times New Roman", stack: "'Times New Roman', serif" },
    FontChoice { name: "Courier New", stack: "'Courier New', monospace" },
    FontChoice { name: "Georgia", stack: "'Georgia', serif" },
    FontChoice { name: "Verdana", stack: "'Verdana', sans-serif" },
];

/// The stack a fresh preview starts with.
pub const DEFAULT_FONT: &str = FONTS[0].stack;

/// Resolve a user-typed font to its CSS stack.
///
/// Matches display names case-insensitively and also accepts an exact
/// stack. Returns `None` for fonts outside the catalog.
#[must_use]
pub fn lookup(input: &str) -> Option<&'static FontChoice> {
    let input = input.trim();
    FONTS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(input) || f.stack == input)
}

/// Display name for a stored stack, falling back to the stack's first family.
#[must_use]
pub fn display_name(stack: &str) -> &str {
    if let Some(font) = FONTS.iter().find(|f| f.stack == stack) {
        return font.name;
    }
    stack
        .split(',')
        .next()
        .map_or(stack, |family| family.trim().trim_matches(|c: char| c == '\'' || c == '"'))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_arial() {
        assert_eq!(DEFAULT_FONT, "Arial, sans-serif");
    }

    #[test]
    fn lookup_by_name_ignores_case() {
        assert_eq!(lookup("georgia").map(|f| f.stack), Some("'Georgia', serif"));
        assert_eq!(
            lookup("  Times New Roman ").map(|f| f.stack),
            Some("'Times New Roman', serif")
        );
    }

    #[test]
    fn lookup_by_stack() {
        assert_eq!(lookup("'Courier New', monospace").map(|f| f.name), Some("Courier New"));
    }

    #[test]
    fn lookup_unknown() {
        assert_eq!(lookup("Comic Sans"), None);
    }

    #[test]
    fn display_name_known_and_custom() {
        assert_eq!(display_name("'Verdana', sans-serif"), "Verdana");
        assert_eq!(display_name("\"Fira Sans\", sans-serif"), "Fira Sans");
        assert_eq!(display_name("Helvetica"), "Helvetica");
    }
}
