//! A builder for palette entries.
//!
//! [`Style`] composes colors and attributes into a single [`ColorPair`]
//! for a palette.

use crate::codes;
use crossterm::style::{Attribute, Color};
use tinttag_core::ColorPair;

/// Represents a complete text style with colors and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Text attributes (bold, italic, etc.)
    pub attributes: Vec<Attribute>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add an attribute.
    pub fn attr(mut self, attr: Attribute) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Make the text bold.
    pub fn bold(self) -> Self {
        self.attr(Attribute::Bold)
    }

    /// Make the text dim.
    pub fn dim(self) -> Self {
        self.attr(Attribute::Dim)
    }

    /// Make the text italic.
    pub fn italic(self) -> Self {
        self.attr(Attribute::Italic)
    }

    /// Make the text underlined.
    pub fn underline(self) -> Self {
        self.attr(Attribute::Underlined)
    }

    /// Swap foreground and background.
    pub fn reverse(self) -> Self {
        self.attr(Attribute::Reverse)
    }

    /// Parse a color name such as `red`, `dark_cyan` or `grey`.
    ///
    /// ```
    /// use crossterm::style::Color;
    /// use tinttag_ansi::Style;
    /// assert_eq!(Style::parse_color("dark_red"), Some(Color::DarkRed));
    /// assert_eq!(Style::parse_color("chartreuse"), None);
    /// ```
    pub fn parse_color(name: &str) -> Option<Color> {
        Color::try_from(name).ok()
    }

    /// Convert to an ANSI escape sequence.
    ///
    /// An empty style yields an empty string.
    pub fn to_ansi(&self) -> String {
        let mut params = Vec::new();

        for attr in &self.attributes {
            let code = match attr {
                Attribute::Bold => "1",
                Attribute::Dim => "2",
                Attribute::Italic => "3",
                Attribute::Underlined => "4",
                Attribute::Reverse => "7",
                Attribute::CrossedOut => "9",
                _ => continue,
            };
            params.push(code.to_string());
        }

        if let Some(color) = self.fg {
            params.push(color_param(color, false));
        }

        if let Some(color) = self.bg {
            params.push(color_param(color, true));
        }

        codes::sgr(&params)
    }

    /// The palette entry for this style: its sequence, then a full reset.
    pub fn pair(&self) -> ColorPair {
        let start = self.to_ansi();
        if start.is_empty() {
            ColorPair::identity()
        } else {
            ColorPair::new(start, codes::RESET)
        }
    }
}

/// SGR parameter for `color` as a foreground or background.
fn color_param(color: Color, background: bool) -> String {
    let offset = if background { 10 } else { 0 };
    let base = match color {
        Color::Rgb { r, g, b } => {
            let lead = if background { 48 } else { 38 };
            return format!("{};2;{};{};{}", lead, r, g, b);
        }
        Color::AnsiValue(n) => {
            let lead = if background { 48 } else { 38 };
            return format!("{};5;{}", lead, n);
        }
        Color::Reset => 39,
        Color::Black => 30,
        Color::DarkRed => 31,
        Color::DarkGreen => 32,
        Color::DarkYellow => 33,
        Color::DarkBlue => 34,
        Color::DarkMagenta => 35,
        Color::DarkCyan => 36,
        Color::Grey => 37,
        Color::DarkGrey => 90,
        Color::Red => 91,
        Color::Green => 92,
        Color::Yellow => 93,
        Color::Blue => 94,
        Color::Magenta => 95,
        Color::Cyan => 96,
        Color::White => 97,
    };
    (base + offset).to_string()
}
