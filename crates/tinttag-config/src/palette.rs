//! User palette entries.
//!
//! An entry either spells out raw `Start`/`Stop` sequences or describes
//! a style (colors plus attributes) that is turned into sequences.

use serde::{Deserialize, Serialize};
use tinttag_ansi::Style;
use tinttag_core::{ColorPair, Result, TintError};

/// One `[palette.<tag>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaletteEntry {
    /// Raw start sequence; takes precedence over the style fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Raw stop sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    /// Foreground color name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    /// Background color name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    /// Bold text
    #[serde(default)]
    pub bold: bool,
    /// Dim text
    #[serde(default)]
    pub dim: bool,
    /// Italic text
    #[serde(default)]
    pub italic: bool,
    /// Underlined text
    #[serde(default)]
    pub underline: bool,
    /// Swap foreground and background
    #[serde(default)]
    pub reverse: bool,
}

impl PaletteEntry {
    /// Whether this entry uses raw sequences.
    pub fn is_raw(&self) -> bool {
        self.start.is_some() || self.stop.is_some()
    }

    /// Build the style described by the style fields.
    pub fn style(&self) -> Result<Style> {
        let mut style = Style::new();
        if let Some(ref name) = self.fg {
            style = style.fg(parse_color(name)?);
        }
        if let Some(ref name) = self.bg {
            style = style.bg(parse_color(name)?);
        }
        if self.bold {
            style = style.bold();
        }
        if self.dim {
            style = style.dim();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline {
            style = style.underline();
        }
        if self.reverse {
            style = style.reverse();
        }
        Ok(style)
    }

    /// Compute the color pair for this entry.
    pub fn to_pair(&self) -> Result<ColorPair> {
        if self.is_raw() {
            return Ok(ColorPair::new(
                self.start.clone().unwrap_or_default(),
                self.stop.clone().unwrap_or_default(),
            ));
        }
        Ok(self.style()?.pair())
    }
}

fn parse_color(name: &str) -> Result<crossterm::style::Color> {
    Style::parse_color(name)
        .ok_or_else(|| TintError::Config(format!("Unknown color name: {}", name)))
}
