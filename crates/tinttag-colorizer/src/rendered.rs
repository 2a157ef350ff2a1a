//! A value paired with the color pair it renders in.

use std::fmt;
use tinttag_core::ColorPair;

/// A borrowed value together with its resolved color pair.
///
/// Color is applied only when the value is displayed. Conversions to
/// other types go straight to the inner value and ignore color.
///
/// `None` and `Some(ColorPair::identity())` display the same but are not
/// equal: an absent pair means the value was never colorized.
///
/// # Example
///
/// ```
/// use tinttag_colorizer::RenderedValue;
/// use tinttag_core::ColorPair;
///
/// let plain = RenderedValue::new(&42, None);
/// let framed = RenderedValue::new(&42, Some(ColorPair::new("<", ">")));
///
/// assert_eq!(plain.to_string(), "42");
/// assert_eq!(framed.to_string(), "<42>");
/// assert_eq!(framed.convert::<i64>(), 42);
/// ```
pub struct RenderedValue<'a, T: ?Sized> {
    value: &'a T,
    color_pair: Option<ColorPair>,
}

impl<'a, T: ?Sized> RenderedValue<'a, T> {
    /// Pair `value` with `color_pair`.
    pub fn new(value: &'a T, color_pair: Option<ColorPair>) -> Self {
        Self { value, color_pair }
    }

    /// Wrap `value` without any color.
    pub fn plain(value: &'a T) -> Self {
        Self::new(value, None)
    }

    /// The wrapped value.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// The resolved color pair, if the value was colorized.
    pub fn color_pair(&self) -> Option<&ColorPair> {
        self.color_pair.as_ref()
    }

    /// Convert the inner value, ignoring color.
    pub fn convert<U>(&self) -> U
    where
        T: Clone,
        U: From<T>,
    {
        U::from(self.value.clone())
    }

    /// Fallibly convert the inner value, ignoring color.
    pub fn try_convert<U>(&self) -> Result<U, U::Error>
    where
        T: Clone,
        U: TryFrom<T>,
    {
        U::try_from(self.value.clone())
    }
}

impl<T: ?Sized> Clone for RenderedValue<'_, T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            color_pair: self.color_pair.clone(),
        }
    }
}

impl<T: fmt::Display + ?Sized> fmt::Display for RenderedValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color_pair {
            Some(ref pair) if !pair.is_identity() => {
                write!(f, "{}{}{}", pair.start, self.value, pair.stop)
            }
            _ => write!(f, "{}", self.value),
        }
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for RenderedValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RenderedValue")
            .field(&self.value)
            .field(&self.color_pair)
            .finish()
    }
}

impl<'b, T, U> PartialEq<RenderedValue<'b, U>> for RenderedValue<'_, T>
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    fn eq(&self, other: &RenderedValue<'b, U>) -> bool {
        self.value == other.value && self.color_pair == other.color_pair
    }
}

impl<T: Eq + ?Sized> Eq for RenderedValue<'_, T> {}
