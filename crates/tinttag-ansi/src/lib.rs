//! Tinttag ANSI
//!
//! This crate provides the ANSI escape sequences and the built-in
//! palettes that back tinttag's colorizers.
//!
//! # Overview
//!
//! - [`codes`] - SGR escape code constants
//! - [`style`] - A [`Style`] builder producing palette entries
//! - [`palette`] - The full-color and monochrome palettes
//!
//! # Example
//!
//! ```
//! use tinttag_ansi::{palette, Style};
//!
//! let pair = palette::full_color().get("error").cloned().unwrap();
//! let text = pair.wrap("failed");
//! assert!(text.starts_with("\x1b[31m"));
//!
//! let bold = Style::new().bold().pair();
//! assert_eq!(bold.wrap("loud"), "\x1b[1mloud\x1b[0m");
//! ```

pub mod codes;
pub mod palette;
pub mod style;

pub use palette::{full_color, monochrome, PaletteKind};
pub use style::Style;
