//! Runtime message templates.
//!
//! Templates use the conventional brace syntax:
//!
//! - `{}` takes the next positional argument
//! - `{0}`, `{1}` take positional arguments by index
//! - `{name}` takes a named argument
//! - `{{` and `}}` are literal braces
//! - `!s` (the default) displays the argument, `!r` shows its debug form
//!   and `!a` shows the debug form with non-ASCII characters escaped
//!
//! Automatic and manual numbering cannot be mixed in one template.
//! Rendered values have no format spec of their own, so `{:>5}` and the
//! like are rejected, as are attribute (`{0.x}`) and index (`{0[1]}`)
//! lookups.

use std::fmt::{self, Write as _};
use tinttag_core::TemplateError;

/// How a field is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conversion {
    /// `Display`
    #[default]
    Str,
    /// `Debug`
    Repr,
    /// `Debug`, non-ASCII escaped
    Ascii,
}

/// Which argument a field refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKey<'t> {
    /// Positional argument (automatic numbering already applied)
    Index(usize),
    /// Named argument
    Name(&'t str),
}

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'t> {
    /// Text copied as-is (brace escapes already collapsed)
    Literal(String),
    /// A replacement field
    Field {
        key: FieldKey<'t>,
        conversion: Conversion,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Auto,
    Manual,
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'t> {
    pieces: Vec<Piece<'t>>,
}

impl<'t> Template<'t> {
    /// Parse `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use tinttag_colorizer::template::{Piece, Template};
    ///
    /// let template = Template::parse("{{x}} = {x}").unwrap();
    /// assert_eq!(template.pieces()[0], Piece::Literal("{x} = ".into()));
    /// assert!(Template::parse("oops }").is_err());
    /// ```
    pub fn parse(source: &'t str) -> Result<Self, TemplateError> {
        let bytes = source.as_bytes();
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut numbering = None;
        let mut next_auto = 0;
        let mut lit_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'{' if bytes.get(i + 1) == Some(&b'{') => {
                    literal.push_str(&source[lit_start..=i]);
                    i += 2;
                    lit_start = i;
                }
                b'}' if bytes.get(i + 1) == Some(&b'}') => {
                    literal.push_str(&source[lit_start..=i]);
                    i += 2;
                    lit_start = i;
                }
                b'}' => return Err(TemplateError::UnmatchedClose(i)),
                b'{' => {
                    literal.push_str(&source[lit_start..i]);
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }

                    let close = find_field_end(bytes, i).ok_or(TemplateError::UnclosedField(i))?;
                    let (name, conversion) = parse_field(&source[i + 1..close])?;
                    let key = if name.is_empty() {
                        check_numbering(&mut numbering, Numbering::Auto)?;
                        next_auto += 1;
                        FieldKey::Index(next_auto - 1)
                    } else if name.bytes().all(|b| b.is_ascii_digit()) {
                        check_numbering(&mut numbering, Numbering::Manual)?;
                        let index = name
                            .parse()
                            .map_err(|_| TemplateError::UnsupportedField(name.to_string()))?;
                        FieldKey::Index(index)
                    } else if name.contains(['.', '[']) {
                        return Err(TemplateError::UnsupportedField(name.to_string()));
                    } else {
                        FieldKey::Name(name)
                    };
                    pieces.push(Piece::Field { key, conversion });

                    i = close + 1;
                    lit_start = i;
                }
                _ => i += 1,
            }
        }

        literal.push_str(&source[lit_start..]);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self { pieces })
    }

    /// The parsed pieces in order.
    pub fn pieces(&self) -> &[Piece<'t>] {
        &self.pieces
    }

    /// Substitute arguments into the template.
    ///
    /// Arguments that no field refers to are ignored.
    pub fn render<R>(&self, positional: &[R], named: &[(&str, R)]) -> Result<String, TemplateError>
    where
        R: fmt::Display + fmt::Debug,
    {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Field { key, conversion } => {
                    let value = match *key {
                        FieldKey::Index(index) => positional
                            .get(index)
                            .ok_or(TemplateError::MissingPositional(index))?,
                        FieldKey::Name(name) => named
                            .iter()
                            .find(|(key, _)| *key == name)
                            .map(|(_, value)| value)
                            .ok_or_else(|| TemplateError::MissingNamed(name.to_string()))?,
                    };
                    write_value(&mut out, value, *conversion);
                }
            }
        }
        Ok(out)
    }
}

/// Parse and render in one step.
///
/// # Example
///
/// ```
/// use tinttag_colorizer::template::format;
///
/// let out = format("{} + {} = {sum}", &[1, 2], &[("sum", 3)]).unwrap();
/// assert_eq!(out, "1 + 2 = 3");
/// ```
pub fn format<R>(source: &str, positional: &[R], named: &[(&str, R)]) -> Result<String, TemplateError>
where
    R: fmt::Display + fmt::Debug,
{
    Template::parse(source)?.render(positional, named)
}

/// Index of the `}` closing the field opened at `open`, honouring nested
/// braces inside the field.
fn find_field_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &b) in bytes[open..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a field body into its name and conversion.
fn parse_field(body: &str) -> Result<(&str, Conversion), TemplateError> {
    let (head, spec) = match body.find(':') {
        Some(pos) => (&body[..pos], &body[pos + 1..]),
        None => (body, ""),
    };
    if !spec.is_empty() {
        return Err(TemplateError::UnsupportedSpec(spec.to_string()));
    }

    let Some(bang) = head.find('!') else {
        return Ok((head, Conversion::Str));
    };
    let conversion = match &head[bang + 1..] {
        "s" => Conversion::Str,
        "r" => Conversion::Repr,
        "a" => Conversion::Ascii,
        other => return Err(TemplateError::UnknownConversion(other.to_string())),
    };
    Ok((&head[..bang], conversion))
}

fn check_numbering(current: &mut Option<Numbering>, wanted: Numbering) -> Result<(), TemplateError> {
    match *current {
        Some(numbering) if numbering != wanted => Err(TemplateError::MixedNumbering),
        _ => {
            *current = Some(wanted);
            Ok(())
        }
    }
}

fn write_value<R: fmt::Display + fmt::Debug>(out: &mut String, value: &R, conversion: Conversion) {
    // Writing into a String cannot fail.
    let _ = match conversion {
        Conversion::Str => write!(out, "{}", value),
        Conversion::Repr => write!(out, "{:?}", value),
        Conversion::Ascii => {
            let repr = format!("{:?}", value);
            for c in repr.chars() {
                if c.is_ascii() {
                    out.push(c);
                } else {
                    out.extend(c.escape_unicode());
                }
            }
            Ok(())
        }
    };
}
