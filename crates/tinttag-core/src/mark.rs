//! Attach a color tag to an arbitrary value.

use crate::tag::{ColorTag, Taggable};
use std::fmt;

/// A value marked with a color tag.
///
/// `Mark` displays exactly like the value it wraps; the tag only matters
/// once a colorizer resolves it.
///
/// ```
/// use tinttag_core::{Mark, Taggable};
/// let mark = Mark::new(42, "important");
/// assert_eq!(mark.to_string(), "42");
/// assert_eq!(mark.color_tag().map(|t| t.to_string()), Some("important".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mark<T> {
    /// The marked value
    pub value: T,
    /// The tag attached to it
    pub color_tag: ColorTag,
}

macro_rules! level_constructors {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Mark `value` with the `", stringify!($name), "` tag.")]
            pub fn $name(value: T) -> Self {
                Self::new(value, stringify!($name))
            }
        )*
    };
}

impl<T> Mark<T> {
    /// Mark `value` with `color_tag`.
    pub fn new(value: T, color_tag: impl Into<ColorTag>) -> Self {
        Self {
            value,
            color_tag: color_tag.into(),
        }
    }

    level_constructors!(debug, info, important, success, warning, error, critical);

    /// Unwrap the marked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Taggable for Mark<T> {
    fn color_tag(&self) -> Option<&ColorTag> {
        Some(&self.color_tag)
    }
}

impl<T: fmt::Display> fmt::Display for Mark<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
