//! Color pairs and the palette that maps tags to them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `(start, stop)` pair of escape sequences.
///
/// `start` is emitted before the content and `stop` after it. The
/// identity pair `("", "")` leaves content untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    /// Sequence written before the content
    pub start: String,
    /// Sequence written after the content
    pub stop: String,
}

impl ColorPair {
    /// Create a new pair.
    pub fn new(start: impl Into<String>, stop: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
        }
    }

    /// The identity pair `("", "")`.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Whether both sequences are empty.
    pub fn is_identity(&self) -> bool {
        self.start.is_empty() && self.stop.is_empty()
    }

    /// The same pair with `start` and `stop` swapped.
    ///
    /// ```
    /// use tinttag_core::ColorPair;
    /// assert_eq!(ColorPair::new("<", ">").reversed(), ColorPair::new(">", "<"));
    /// ```
    pub fn reversed(&self) -> Self {
        Self {
            start: self.stop.clone(),
            stop: self.start.clone(),
        }
    }

    /// Wrap `content` in this pair.
    pub fn wrap(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.start.len() + content.len() + self.stop.len());
        out.push_str(&self.start);
        out.push_str(content);
        out.push_str(&self.stop);
        out
    }
}

impl<S: Into<String>, E: Into<String>> From<(S, E)> for ColorPair {
    fn from((start, stop): (S, E)) -> Self {
        Self::new(start, stop)
    }
}

/// Mapping from tag name to [`ColorPair`].
///
/// Lookups of unknown tags return `None`; callers treat a miss as
/// "contributes nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: BTreeMap<String, ColorPair>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the pair for `tag`.
    pub fn get(&self, tag: &str) -> Option<&ColorPair> {
        self.entries.get(tag)
    }

    /// Whether `tag` has an entry.
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Add or replace the pair for `tag`.
    pub fn insert(&mut self, tag: impl Into<String>, pair: impl Into<ColorPair>) -> Option<ColorPair> {
        self.entries.insert(tag.into(), pair.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, tag: impl Into<String>, pair: impl Into<ColorPair>) -> Self {
        self.insert(tag, pair);
        self
    }

    /// Layer `other` on top of this palette; its entries win.
    pub fn extend_from(&mut self, other: &Palette) {
        for (tag, pair) in &other.entries {
            self.entries.insert(tag.clone(), pair.clone());
        }
    }

    /// Iterate entries in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorPair)> {
        self.entries.iter().map(|(tag, pair)| (tag.as_str(), pair))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, P> FromIterator<(K, P)> for Palette
where
    K: Into<String>,
    P: Into<ColorPair>,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(tag, pair)| (tag.into(), pair.into()))
                .collect(),
        }
    }
}

impl<K, P, const N: usize> From<[(K, P); N]> for Palette
where
    K: Into<String>,
    P: Into<ColorPair>,
{
    fn from(entries: [(K, P); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pair() {
        assert!(ColorPair::identity().is_identity());
        assert!(!ColorPair::new("[", "").is_identity());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(ColorPair::new("[", "]").wrap("x"), "[x]");
        assert_eq!(ColorPair::identity().wrap("x"), "x");
    }

    #[test]
    fn test_palette_lookup_miss() {
        let palette = Palette::from([("a", ("[", "]"))]);
        assert_eq!(palette.get("a"), Some(&ColorPair::new("[", "]")));
        assert_eq!(palette.get("b"), None);
    }

    #[test]
    fn test_extend_from_overrides() {
        let mut base = Palette::from([("a", ("[", "]")), ("b", ("(", ")"))]);
        let user = Palette::from([("b", ("<", ">")), ("c", ("{", "}"))]);
        base.extend_from(&user);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get("b"), Some(&ColorPair::new("<", ">")));
        assert_eq!(base.get("a"), Some(&ColorPair::new("[", "]")));
    }

    #[test]
    fn test_iter_is_sorted() {
        let palette = Palette::from([("z", ("", "")), ("a", ("", ""))]);
        let tags: Vec<_> = palette.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, vec!["a", "z"]);
    }
}
