//! The colorizing facade.

use crate::printer::Printer;
use crate::rendered::RenderedValue;
use crate::resolver::ColorPairResolver;
use std::cell::RefCell;
use tinttag_ansi::PaletteKind;
use tinttag_core::{ColorPair, Palette, Taggable};

/// Turns tagged values into [`RenderedValue`]s using a palette.
///
/// # Example
///
/// ```
/// use tinttag_colorizer::Colorizer;
/// use tinttag_core::{Mark, Palette};
///
/// let colorizer = Colorizer::new(Palette::from([("a", ("[", "]"))]));
///
/// assert_eq!(colorizer.colorize(&Mark::new("x", "a"), None).to_string(), "[x]");
/// assert_eq!(colorizer.colorize("y", None).to_string(), "y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorizer {
    resolver: ColorPairResolver,
}

impl Default for Colorizer {
    /// The full-color palette without a default tag.
    fn default() -> Self {
        Self::full_color()
    }
}

impl Colorizer {
    /// Create a colorizer over `palette`.
    ///
    /// The palette is used as given: an empty palette colors nothing and
    /// does not fall back to a built-in one. Use [`Colorizer::default`]
    /// or [`Colorizer::from_kind`] for the built-in palettes.
    pub fn new(palette: Palette) -> Self {
        Self {
            resolver: ColorPairResolver::new(palette),
        }
    }

    /// Create a colorizer over a built-in palette.
    pub fn from_kind(kind: PaletteKind) -> Self {
        Self::new(kind.palette())
    }

    /// Colorizer over the full-color palette.
    pub fn full_color() -> Self {
        Self::from_kind(PaletteKind::FullColor)
    }

    /// Colorizer over the monochrome palette.
    pub fn monochrome() -> Self {
        Self::from_kind(PaletteKind::Monochrome)
    }

    /// Fall back to `tag` when none of a value's tags are known.
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.resolver = self.resolver.with_default_tag(tag);
        self
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &ColorPairResolver {
        &self.resolver
    }

    /// The palette in use.
    pub fn palette(&self) -> &Palette {
        self.resolver.palette()
    }

    /// Resolve `tags` to a color pair directly.
    pub fn get_color_pair<'t>(
        &self,
        tags: impl IntoIterator<Item = &'t str>,
        context_tag: Option<&str>,
    ) -> ColorPair {
        self.resolver.resolve(tags, context_tag)
    }

    /// Wrap `value` with the color pair its tag resolves to.
    ///
    /// Values without a tag, or with an empty one, come back with no
    /// color pair at all.
    pub fn colorize<'a, T>(&self, value: &'a T, context_tag: Option<&str>) -> RenderedValue<'a, T>
    where
        T: Taggable + ?Sized,
    {
        let color_pair = value
            .color_tag()
            .filter(|tag| !tag.is_empty())
            .map(|tag| self.resolver.resolve(tag.tags(), context_tag));
        RenderedValue::new(value, color_pair)
    }

    /// A printer writing to `sink`, optionally bound to `context_tag`.
    pub fn printer<'a, W>(&'a self, sink: &'a RefCell<W>, context_tag: Option<&str>) -> Printer<'a, W>
    where
        W: std::io::Write + ?Sized,
    {
        let printer = Printer::new(self, sink);
        match context_tag {
            Some(tag) => printer.bind_context(tag),
            None => printer,
        }
    }
}
