//! Print colorized messages to a sink.

use crate::args::{Args, Argument};
use crate::colorizer::Colorizer;
use crate::rendered::RenderedValue;
use crate::template::Template;
use log::trace;
use std::cell::RefCell;
use std::io::Write;
use tinttag_core::{Mark, Result};

/// Formats messages with colorized arguments and writes them, one line
/// per call, to a shared sink.
///
/// A printer never changes after construction; [`bind_context`] returns
/// a new printer over the same colorizer and sink.
///
/// With a context tag bound, the template itself is wrapped in the
/// context pair and every argument is resolved inside that context, so
/// tagged arguments step out of the context and back in around their
/// own sequences.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use tinttag_colorizer::{Args, Colorizer};
/// use tinttag_core::{Mark, Palette};
///
/// let colorizer = Colorizer::new(Palette::from([
///     ("a", ("[", "]")),
///     ("b", ("(", ")")),
///     ("c", ("<", ">")),
/// ]));
/// let sink = RefCell::new(Vec::new());
/// let printer = colorizer.printer(&sink, None);
///
/// let value = Mark::new("value", ["a", "b"]);
/// printer
///     .bind_context("c")
///     .emit("this {} a {value} !", &Args::new().arg(&"is").named("value", &value))
///     .unwrap();
///
/// assert_eq!(
///     String::from_utf8(sink.into_inner()).unwrap(),
///     "<this is a ><[(value)]>< !>\n"
/// );
/// ```
///
/// [`bind_context`]: Printer::bind_context
pub struct Printer<'a, W: ?Sized> {
    colorizer: &'a Colorizer,
    sink: &'a RefCell<W>,
    context_tag: Option<String>,
}

impl<'a, W: Write + ?Sized> Printer<'a, W> {
    /// Create a printer with no context tag.
    pub fn new(colorizer: &'a Colorizer, sink: &'a RefCell<W>) -> Self {
        Self {
            colorizer,
            sink,
            context_tag: None,
        }
    }

    /// The bound context tag.
    pub fn context_tag(&self) -> Option<&str> {
        self.context_tag.as_deref().filter(|tag| !tag.is_empty())
    }

    /// The colorizer this printer resolves tags with.
    pub fn colorizer(&self) -> &'a Colorizer {
        self.colorizer
    }

    /// A new printer over the same colorizer and sink, bound to `context_tag`.
    pub fn bind_context(&self, context_tag: impl Into<String>) -> Printer<'a, W> {
        Printer {
            colorizer: self.colorizer,
            sink: self.sink,
            context_tag: Some(context_tag.into()),
        }
    }

    /// Render `template` with `args` and write it plus a newline.
    ///
    /// The whole line is written with a single call. Template errors are
    /// returned before anything is written.
    pub fn emit(&self, template: &str, args: &Args<'_>) -> Result<()> {
        let mut line = self.render(template, args)?;
        line.push('\n');
        trace!("emit: {:?}", line);

        self.sink.borrow_mut().write_all(line.as_bytes())?;
        Ok(())
    }

    /// Render `template` with `args` without writing anything.
    pub fn render(&self, template: &str, args: &Args<'_>) -> Result<String> {
        let context = self.context_tag();

        let wrapped;
        let template = match context {
            Some(tag) => {
                wrapped = self.colorizer.colorize(&Mark::new(template, tag), None).to_string();
                wrapped.as_str()
            }
            None => template,
        };

        let positional: Vec<RenderedValue<'_, dyn Argument + '_>> = args
            .positional()
            .iter()
            .map(|&value| self.colorizer.colorize(value, context))
            .collect();
        let named: Vec<(&str, RenderedValue<'_, dyn Argument + '_>)> = args
            .named_values()
            .iter()
            .map(|&(name, value)| (name, self.colorizer.colorize(value, context)))
            .collect();

        Ok(Template::parse(template)?.render(&positional, &named)?)
    }
}

impl<W: ?Sized> Clone for Printer<'_, W> {
    fn clone(&self) -> Self {
        Self {
            colorizer: self.colorizer,
            sink: self.sink,
            context_tag: self.context_tag.clone(),
        }
    }
}

impl<W: ?Sized> std::fmt::Debug for Printer<'_, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer")
            .field("colorizer", self.colorizer)
            .field("context_tag", &self.context_tag)
            .finish_non_exhaustive()
    }
}
