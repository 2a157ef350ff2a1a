//! Tinttag Colorizer
//!
//! Semantic coloring for command-line output: values carry color *tags*
//! (`"error"`, `"important"`, ...) and a palette decides what each tag
//! looks like.
//!
//! # Overview
//!
//! - [`resolver`] - Compose the color pair for a set of tags and a context
//! - [`RenderedValue`] - A value plus its pair, colored only when displayed
//! - [`Colorizer`] - The facade tying a palette to values
//! - [`template`] - Runtime `{}` / `{name}` message templates
//! - [`Printer`] - Writes formatted, colorized lines to a sink
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use tinttag_colorizer::{Args, Colorizer};
//! use tinttag_core::{Mark, Palette};
//!
//! let colorizer = Colorizer::new(Palette::from([
//!     ("a", ("[", "]")),
//!     ("b", ("(", ")")),
//!     ("c", ("<", ">")),
//! ]));
//! let sink = RefCell::new(Vec::new());
//!
//! let value = Mark::new("value", ["a", "b", "c"]);
//! colorizer
//!     .printer(&sink, None)
//!     .emit("this {} a {value} !", &Args::new().arg(&"is").named("value", &value))
//!     .unwrap();
//!
//! assert_eq!(sink.into_inner(), b"this is a [(<value>)] !\n");
//! ```

pub mod args;
pub mod colorizer;
pub mod printer;
pub mod rendered;
pub mod resolver;
pub mod template;

pub use args::{Args, Argument};
pub use colorizer::Colorizer;
pub use printer::Printer;
pub use rendered::RenderedValue;
pub use resolver::ColorPairResolver;
