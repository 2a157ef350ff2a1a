//! ANSI escape code constants.
//!
//! This module provides the raw SGR sequences used by the built-in
//! palettes and by [`Style`](crate::style::Style).

/// Control Sequence Introducer.
const CSI: &str = "\x1b[";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Bold on.
pub const BOLD_ON: &str = "\x1b[1m";

/// Red foreground.
pub const FG_RED: &str = "\x1b[31m";

/// Green foreground.
pub const FG_GREEN: &str = "\x1b[32m";

/// Yellow foreground.
pub const FG_YELLOW: &str = "\x1b[33m";

/// Red background.
pub const BG_RED: &str = "\x1b[41m";

/// Build an SGR sequence from `;`-joined parameters.
///
/// # Example
///
/// ```
/// use tinttag_ansi::codes::sgr;
/// assert_eq!(sgr(&["1", "31"]), "\x1b[1;31m");
/// assert_eq!(sgr::<&str>(&[]), "");
/// ```
pub fn sgr<S: AsRef<str>>(params: &[S]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = params.iter().map(AsRef::as_ref).collect();
    format!("{}{}m", CSI, joined.join(";"))
}
