//! Built-in palettes.
//!
//! Two tables cover the semantic levels: a full-color one for terminals
//! and a monochrome fallback that only highlights `important` values.
//! Which one to use is the host's decision.

use crate::codes;
use tinttag_core::Palette;

/// Full-color entries: (tag, start, stop).
pub const FULL_COLOR: &[(&str, &str, &str)] = &[
    ("debug", "\x1b[2m\x1b[36m", codes::RESET),
    ("info", codes::RESET, codes::RESET),
    ("important", codes::BOLD_ON, codes::RESET),
    ("success", codes::FG_GREEN, codes::RESET),
    ("warning", codes::FG_YELLOW, codes::RESET),
    ("error", codes::FG_RED, codes::RESET),
    ("critical", codes::BG_RED, codes::RESET),
];

/// Monochrome entries: plain markers, no escape sequences.
pub const MONOCHROME: &[(&str, &str, &str)] = &[("important", "**", "**")];

/// The semantic tags every full-color palette defines.
pub const LEVELS: &[&str] = &[
    "debug",
    "info",
    "important",
    "success",
    "warning",
    "error",
    "critical",
];

/// Which built-in palette to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    /// ANSI colors for the semantic levels
    #[default]
    FullColor,
    /// Markers only, for streams that cannot show color
    Monochrome,
}

impl PaletteKind {
    /// Build the palette for this kind.
    pub fn palette(self) -> Palette {
        match self {
            PaletteKind::FullColor => full_color(),
            PaletteKind::Monochrome => monochrome(),
        }
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteKind::FullColor => write!(f, "full-color"),
            PaletteKind::Monochrome => write!(f, "monochrome"),
        }
    }
}

fn build(entries: &[(&str, &str, &str)]) -> Palette {
    entries
        .iter()
        .map(|&(tag, start, stop)| (tag, (start, stop)))
        .collect()
}

/// The full-color palette.
pub fn full_color() -> Palette {
    build(FULL_COLOR)
}

/// The monochrome palette.
pub fn monochrome() -> Palette {
    build(MONOCHROME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinttag_core::ColorPair;

    #[test]
    fn test_full_color_covers_levels() {
        let palette = full_color();
        for level in LEVELS {
            assert!(palette.contains(level), "missing {}", level);
        }
        assert_eq!(palette.len(), LEVELS.len());
    }

    #[test]
    fn test_full_color_error() {
        assert_eq!(
            full_color().get("error"),
            Some(&ColorPair::new("\x1b[31m", "\x1b[0m"))
        );
    }

    #[test]
    fn test_monochrome_only_important() {
        let palette = monochrome();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get("important"), Some(&ColorPair::new("**", "**")));
        assert!(palette.get("error").is_none());
    }

    #[test]
    fn test_kind_palette() {
        assert_eq!(PaletteKind::Monochrome.palette(), monochrome());
        assert_eq!(PaletteKind::default(), PaletteKind::FullColor);
    }
}
