//! Output configuration.
//!
//! Controls whether color is used and which tag applies to untagged
//! lookups that find nothing.

use serde::{Deserialize, Serialize};
use tinttag_ansi::PaletteKind;

/// When to emit color escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Always use the full-color palette
    Always,
    /// Always use the monochrome palette
    Never,
}

impl ColorMode {
    /// Pick the built-in palette for this mode.
    ///
    /// `is_tty` is whether the output stream is a terminal; `no_color`
    /// is whether the `NO_COLOR` convention asks for plain output.
    pub fn resolve(self, is_tty: bool, no_color: bool) -> PaletteKind {
        match self {
            ColorMode::Always => PaletteKind::FullColor,
            ColorMode::Never => PaletteKind::Monochrome,
            ColorMode::Auto if is_tty && !no_color => PaletteKind::FullColor,
            ColorMode::Auto => PaletteKind::Monochrome,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode '{}'", other)),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Color mode.
    /// Default: auto
    #[serde(default)]
    pub color: ColorMode,

    /// Tag used when none of a value's tags are in the palette.
    /// Default: "" (no default tag)
    #[serde(default)]
    pub default_tag: String,
}

impl OutputConfig {
    /// The default tag, or `None` when unset.
    pub fn default_tag(&self) -> Option<&str> {
        Some(self.default_tag.as_str()).filter(|tag| !tag.is_empty())
    }

    /// Merge another OutputConfig into this one.
    ///
    /// The color mode is always copied; an empty default tag in `other`
    /// keeps the current one.
    pub fn merge(&mut self, other: &OutputConfig) {
        self.color = other.color;
        if !other.default_tag.is_empty() {
            self.default_tag = other.default_tag.clone();
        }
    }
}
