//! Resolve a set of tags into a single color pair.
//!
//! Pairs nest like brackets: start sequences are emitted in tag order and
//! stop sequences in reverse, so the innermost style closes first.
//!
//! A context tag wraps everything else. It contributes two entries ahead
//! of the value's own pairs: the context pair *reversed* (which leaves the
//! surrounding context), then the context pair itself. With context `c`
//! mapped to `(sc, ec)` and tag `a` mapped to `(sa, ea)`:
//!
//! ```text
//! start = ec + sc + sa
//! stop  = ea + ec + sc
//! ```

use tinttag_core::{ColorPair, Palette};

/// Compose the pair for `tags` under an optional `context_tag`.
///
/// Unknown tags contribute nothing. If none of `tags` is found,
/// `default_tag` is tried in their place. An empty context tag counts as
/// no context.
///
/// # Example
///
/// ```
/// use tinttag_colorizer::resolver::compose;
/// use tinttag_core::{ColorPair, Palette};
///
/// let palette = Palette::from([("a", ("[", "]")), ("b", ("<", ">"))]);
/// assert_eq!(compose(&palette, None, ["a", "b"], None), ColorPair::new("[<", ">]"));
/// assert_eq!(compose(&palette, None, ["a"], Some("b")), ColorPair::new("><[", "]><"));
/// assert_eq!(compose(&palette, Some("b"), ["zzz"], None), ColorPair::new("<", ">"));
/// ```
pub fn compose<'t>(
    palette: &Palette,
    default_tag: Option<&str>,
    tags: impl IntoIterator<Item = &'t str>,
    context_tag: Option<&str>,
) -> ColorPair {
    let mut found: Vec<&ColorPair> = tags.into_iter().filter_map(|tag| palette.get(tag)).collect();

    if found.is_empty() {
        found.extend(default_tag.and_then(|tag| palette.get(tag)));
    }

    let framing: Vec<ColorPair> = context_tag
        .filter(|tag| !tag.is_empty())
        .and_then(|tag| palette.get(tag))
        .map(|ctx| vec![ctx.reversed(), ctx.clone()])
        .unwrap_or_default();

    let pairs: Vec<&ColorPair> = framing.iter().chain(found).collect();
    ColorPair {
        start: pairs.iter().map(|pair| pair.start.as_str()).collect(),
        stop: pairs.iter().rev().map(|pair| pair.stop.as_str()).collect(),
    }
}

/// A palette plus an optional default tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPairResolver {
    palette: Palette,
    default_tag: Option<String>,
}

impl ColorPairResolver {
    /// Create a resolver over `palette` with no default tag.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            default_tag: None,
        }
    }

    /// Use `tag` when none of a value's tags are found.
    ///
    /// An empty tag clears the default.
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.default_tag = if tag.is_empty() { None } else { Some(tag) };
        self
    }

    /// The palette this resolver reads.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The configured default tag.
    pub fn default_tag(&self) -> Option<&str> {
        self.default_tag.as_deref()
    }

    /// Resolve `tags` under an optional `context_tag`. See [`compose`].
    pub fn resolve<'t>(
        &self,
        tags: impl IntoIterator<Item = &'t str>,
        context_tag: Option<&str>,
    ) -> ColorPair {
        compose(&self.palette, self.default_tag(), tags, context_tag)
    }
}
