//! Property-based tests for tinttag.
//!
//! These tests use proptest to generate palettes, tags and values and
//! check the composition rules of the resolver and the rendered wrapper.

use proptest::prelude::*;

use tinttag_colorizer::template;
use tinttag_colorizer::{ColorPairResolver, RenderedValue};
use tinttag_core::{ColorPair, Palette};

/// Generate a tag name.
fn tag() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

/// Generate an escape-like sequence.
fn sequence() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E]{0,6}").unwrap()
}

/// Generate a color pair.
fn pair() -> impl Strategy<Value = ColorPair> {
    (sequence(), sequence()).prop_map(|(start, stop)| ColorPair::new(start, stop))
}

/// Generate a palette.
fn palette() -> impl Strategy<Value = Palette> {
    prop::collection::btree_map(tag(), pair(), 0..8).prop_map(|entries| entries.into_iter().collect())
}

/// Generate text without braces.
fn text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^{}]{0,40}").unwrap()
}

// =============================================================================
// Resolver Property Tests
// =============================================================================

proptest! {
    /// No tags, no default and no context resolve to the identity pair.
    #[test]
    fn empty_tags_are_identity(palette in palette()) {
        let resolver = ColorPairResolver::new(palette);
        prop_assert_eq!(resolver.resolve([], None), ColorPair::identity());
    }

    /// A single known tag resolves to its own pair.
    #[test]
    fn single_tag_is_its_pair(palette in palette(), t in tag(), p in pair()) {
        let palette = palette.with(t.clone(), p.clone());
        let resolver = ColorPairResolver::new(palette);
        prop_assert_eq!(resolver.resolve([t.as_str()], None), p);
    }

    /// Two tags open in order and close in reverse.
    #[test]
    fn two_tags_nest(t1 in tag(), t2 in tag(), p1 in pair(), p2 in pair()) {
        prop_assume!(t1 != t2);
        let resolver = ColorPairResolver::new(
            Palette::new().with(t1.clone(), p1.clone()).with(t2.clone(), p2.clone()),
        );
        let expected = ColorPair::new(
            format!("{}{}", p1.start, p2.start),
            format!("{}{}", p2.stop, p1.stop),
        );
        prop_assert_eq!(resolver.resolve([t1.as_str(), t2.as_str()], None), expected);
    }

    /// Unknown tags fall back to the default tag.
    #[test]
    fn default_fallback(d in tag(), p in pair(), unknown in tag()) {
        prop_assume!(d != unknown);
        let resolver = ColorPairResolver::new(Palette::new().with(d.clone(), p.clone()))
            .with_default_tag(d);
        prop_assert_eq!(resolver.resolve([], None), p.clone());
        prop_assert_eq!(resolver.resolve([unknown.as_str()], None), p);
    }

    /// A context wraps the tag with its reversed pair, then itself.
    #[test]
    fn context_composition(c in tag(), a in tag(), pc in pair(), pa in pair()) {
        prop_assume!(c != a);
        let resolver = ColorPairResolver::new(
            Palette::new().with(c.clone(), pc.clone()).with(a.clone(), pa.clone()),
        );
        let expected = ColorPair::new(
            format!("{}{}{}", pc.stop, pc.start, pa.start),
            format!("{}{}{}", pa.stop, pc.stop, pc.start),
        );
        prop_assert_eq!(resolver.resolve([a.as_str()], Some(c.as_str())), expected);
    }

    /// Resolution never depends on tags missing from the palette.
    #[test]
    fn unknown_tags_are_ignored(palette in palette(), tags in prop::collection::vec(tag(), 0..6)) {
        let resolver = ColorPairResolver::new(palette.clone());
        let known: Vec<&str> = tags.iter().map(String::as_str).filter(|t| palette.contains(t)).collect();
        prop_assert_eq!(
            resolver.resolve(tags.iter().map(String::as_str), None),
            resolver.resolve(known, None)
        );
    }
}

// =============================================================================
// RenderedValue Property Tests
// =============================================================================

proptest! {
    /// Without a pair the rendering is the plain value.
    #[test]
    fn plain_rendering(value in text()) {
        prop_assert_eq!(RenderedValue::plain(value.as_str()).to_string(), value);
    }

    /// With a pair the value is framed by it.
    #[test]
    fn framed_rendering(value in text(), p in pair()) {
        let expected = format!("{}{}{}", p.start, value, p.stop);
        prop_assert_eq!(RenderedValue::new(value.as_str(), Some(p)).to_string(), expected);
    }

    /// Numeric conversion ignores the pair.
    #[test]
    fn conversion_ignores_pair(n in any::<i32>(), p in pair()) {
        prop_assert_eq!(RenderedValue::new(&n, Some(p)).convert::<i64>(), n as i64);
    }

    /// An absent pair never equals an explicit one.
    #[test]
    fn absent_pair_differs(n in any::<i64>()) {
        prop_assert_ne!(
            RenderedValue::plain(&n),
            RenderedValue::new(&n, Some(ColorPair::identity()))
        );
    }
}

// =============================================================================
// Template Property Tests
// =============================================================================

proptest! {
    /// Text without braces renders unchanged.
    #[test]
    fn brace_free_text_is_literal(source in text()) {
        prop_assert_eq!(template::format::<&str>(&source, &[], &[]).unwrap(), source);
    }

    /// The template parser never panics.
    #[test]
    fn parser_never_panics(source in prop::string::string_regex(r"[\x20-\x7E]{0,60}").unwrap()) {
        let _ = template::Template::parse(&source);
    }
}
