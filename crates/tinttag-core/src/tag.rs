//! Color tags and the protocol for values that carry them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One tag name or an ordered list of tag names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorTag {
    /// A single tag
    One(String),
    /// Several tags, applied outermost first
    Many(Vec<String>),
}

impl ColorTag {
    /// Iterate the tag names in order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            ColorTag::One(tag) => std::slice::from_ref(tag),
            ColorTag::Many(tags) => tags,
        };
        slice.iter().map(String::as_str)
    }

    /// An empty tag name or an empty list carries no color.
    pub fn is_empty(&self) -> bool {
        match self {
            ColorTag::One(tag) => tag.is_empty(),
            ColorTag::Many(tags) => tags.is_empty(),
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorTag::One(tag) => write!(f, "{}", tag),
            ColorTag::Many(tags) => write!(f, "{}", tags.join(",")),
        }
    }
}

impl From<&str> for ColorTag {
    fn from(tag: &str) -> Self {
        ColorTag::One(tag.to_string())
    }
}

impl From<String> for ColorTag {
    fn from(tag: String) -> Self {
        ColorTag::One(tag)
    }
}

impl From<Vec<String>> for ColorTag {
    fn from(tags: Vec<String>) -> Self {
        ColorTag::Many(tags)
    }
}

impl From<Vec<&str>> for ColorTag {
    fn from(tags: Vec<&str>) -> Self {
        ColorTag::Many(tags.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ColorTag {
    fn from(tags: [&str; N]) -> Self {
        ColorTag::Many(tags.iter().map(|tag| tag.to_string()).collect())
    }
}

/// A value that may carry a color tag.
///
/// Types opt in by overriding [`color_tag`](Taggable::color_tag); the
/// default says "no tag", so plain values can be handed to a colorizer
/// and come back uncolored.
pub trait Taggable {
    /// The tag attached to this value, if any.
    fn color_tag(&self) -> Option<&ColorTag> {
        None
    }
}

impl<T: Taggable + ?Sized> Taggable for &T {
    fn color_tag(&self) -> Option<&ColorTag> {
        (**self).color_tag()
    }
}

impl<T: Taggable + ?Sized> Taggable for Box<T> {
    fn color_tag(&self) -> Option<&ColorTag> {
        (**self).color_tag()
    }
}

macro_rules! impl_untagged {
    ($($ty:ty),* $(,)?) => {
        $(impl Taggable for $ty {})*
    };
}

impl_untagged!(
    str, String, bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_order() {
        let tag = ColorTag::from(["a", "b", "c"]);
        assert_eq!(tag.tags().collect::<Vec<_>>(), vec!["a", "b", "c"]);

        let tag = ColorTag::from("info");
        assert_eq!(tag.tags().collect::<Vec<_>>(), vec!["info"]);
    }

    #[test]
    fn test_empty_tags() {
        assert!(ColorTag::from("").is_empty());
        assert!(ColorTag::Many(Vec::new()).is_empty());
        assert!(!ColorTag::from(vec![""]).is_empty());
    }

    #[test]
    fn test_plain_values_are_untagged() {
        assert!("text".color_tag().is_none());
        assert!(42i32.color_tag().is_none());
        assert!((&3.5f64).color_tag().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorTag::from(["a", "b"]).to_string(), "a,b");
        assert_eq!(ColorTag::from("error").to_string(), "error");
    }
}
