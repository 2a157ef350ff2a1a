//! Error types for tinttag

use thiserror::Error;

/// Main error type for tinttag operations
#[derive(Error, Debug)]
pub enum TintError {
    /// IO error while writing output or reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template substitution error
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

/// Errors raised while substituting values into a message template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `}` that is neither doubled nor closing a field.
    #[error("single '}}' encountered at byte {0}")]
    UnmatchedClose(usize),

    /// A `{` whose field is never closed.
    #[error("expected '}}' before end of template (field opened at byte {0})")]
    UnclosedField(usize),

    /// A positional field refers to an argument that was not supplied.
    #[error("no positional argument at index {0}")]
    MissingPositional(usize),

    /// A named field refers to an argument that was not supplied.
    #[error("no named argument '{0}'")]
    MissingNamed(String),

    /// `{}` and `{0}` fields mixed in one template.
    #[error("cannot switch between automatic and manual field numbering")]
    MixedNumbering,

    /// A conversion other than `!s`, `!r` or `!a`.
    #[error("unknown conversion specifier '{0}'")]
    UnknownConversion(String),

    /// Rendered values do not accept format specs.
    #[error("unsupported format spec '{0}'")]
    UnsupportedSpec(String),

    /// Attribute or index access inside a field name.
    #[error("unsupported field name '{0}'")]
    UnsupportedField(String),
}

/// Result type alias for tinttag operations
pub type Result<T> = std::result::Result<T, TintError>;
