//! Arguments handed to a printer.

use std::fmt;
use tinttag_core::Taggable;

/// Anything a printer can substitute into a template.
///
/// Implemented automatically for every displayable, debuggable
/// [`Taggable`] type.
pub trait Argument: Taggable + fmt::Display + fmt::Debug {}

impl<T: Taggable + fmt::Display + fmt::Debug + ?Sized> Argument for T {}

/// Positional and named arguments for [`Printer::emit`](crate::Printer::emit).
///
/// # Example
///
/// ```
/// use tinttag_colorizer::Args;
/// use tinttag_core::Mark;
///
/// let mark = Mark::error("disk full");
/// let args = Args::new().arg(&"write").arg(&3).named("reason", &mark);
/// assert_eq!(args.positional().len(), 2);
/// assert_eq!(args.named_values()[0].0, "reason");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Args<'a> {
    positional: Vec<&'a dyn Argument>,
    named: Vec<(&'a str, &'a dyn Argument)>,
}

impl<'a> Args<'a> {
    /// No arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg<T: Argument + 'a>(mut self, value: &'a T) -> Self {
        self.positional.push(value);
        self
    }

    /// Add a named argument.
    pub fn named<T: Argument + 'a>(mut self, name: &'a str, value: &'a T) -> Self {
        self.named.push((name, value));
        self
    }

    /// Append an already type-erased positional argument.
    pub fn push(&mut self, value: &'a dyn Argument) {
        self.positional.push(value);
    }

    /// Add an already type-erased named argument.
    pub fn push_named(&mut self, name: &'a str, value: &'a dyn Argument) {
        self.named.push((name, value));
    }

    /// Positional arguments in order.
    pub fn positional(&self) -> &[&'a dyn Argument] {
        &self.positional
    }

    /// Named arguments in insertion order.
    pub fn named_values(&self) -> &[(&'a str, &'a dyn Argument)] {
        &self.named
    }
}
