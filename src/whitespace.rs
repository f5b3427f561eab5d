//! Whitespace normalization utilities.
//!
//! This module provides [`trim_trailing`], which strips whitespace from the
//! end of a text value while leaving leading and internal whitespace alone.
//!
//! # Whitespace Definition
//!
//! This crate uses Unicode's definition of whitespace (the `White_Space`
//! property), which includes:
//! - ASCII space (U+0020)
//! - ASCII tab (U+0009)
//! - ASCII newline (U+000A)
//! - ASCII carriage return (U+000D)
//! - Non-breaking space (U+00A0), ideographic space (U+3000), and the rest
//!   of the Unicode whitespace characters

/// Strips trailing whitespace from the end of a text value.
///
/// Only the end of the text is touched: leading and internal whitespace are
/// preserved verbatim. The function borrows rather than allocates, so it is
/// free for callers that only need the normalized view.
///
/// # Examples
///
/// ```rust
/// use joiner::trim_trailing;
///
/// assert_eq!(trim_trailing("Hello World "), "Hello World");
/// assert_eq!(trim_trailing("  spaced  out\t\n"), "  spaced  out");
///
/// // Leading and internal whitespace are untouched
/// assert_eq!(trim_trailing("  a  b"), "  a  b");
///
/// // Whitespace-only and empty inputs collapse to empty
/// assert_eq!(trim_trailing("   \n\t   "), "");
/// assert_eq!(trim_trailing(""), "");
///
/// // Unicode whitespace counts too
/// assert_eq!(trim_trailing("hello\u{00A0}"), "hello");
/// ```
///
/// # See Also
///
/// - [`concatenate()`](crate::concatenate) for joining two values under the
///   default policy
/// - [`join()`](crate::join) for the full configurable pipeline
pub fn trim_trailing(text: &str) -> &str {
    text.trim_end()
}
