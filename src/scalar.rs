//! Scalar formatting rules for dotenv values.
//!
//! Every value the serializer emits bottoms out in one of these stateless
//! functions. They decide the textual form of a single scalar; where it
//! lands (which key, joined with what) is the serializer's business.
//!
//! ## Booleans
//!
//! `true` renders as `true`; `false` renders as the empty string, so the
//! line still appears as `KEY=`. A shell sourcing the file can then tell
//! "explicitly off" (`KEY=`, variable set but empty) apart from "never
//! configured" (no line at all). Absent optionals take the second form.
//!
//! ## Strings
//!
//! Strings containing whitespace are wrapped in double quotes, with any
//! literal `"` inside escaped as `\"`. All other strings pass through
//! verbatim. Backslashes, newlines, and control characters are not
//! escaped; values containing them are outside what this format can
//! represent faithfully.

use std::borrow::Cow;

/// Textual form of a boolean.
///
/// # Examples
///
/// ```rust
/// use serde_dotenv::scalar::bool_text;
///
/// assert_eq!(bool_text(true), "true");
/// assert_eq!(bool_text(false), "");
/// ```
#[must_use]
pub fn bool_text(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        ""
    }
}

/// Quotes a string if it contains whitespace, escaping interior `"`.
///
/// Borrows the input when no quoting is needed.
///
/// # Examples
///
/// ```rust
/// use serde_dotenv::scalar::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("hello world"), "\"hello world\"");
/// assert_eq!(escape("hello \"john\""), "\"hello \\\"john\\\"\"");
/// ```
#[must_use]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(char::is_whitespace) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_text() {
        assert_eq!(bool_text(true), "true");
        assert_eq!(bool_text(false), "");
    }

    #[test]
    fn test_escape_plain_string() {
        assert_eq!(escape("hello"), "hello");
        assert_eq!(escape(""), "");
        assert_eq!(escape("/usr/local/bin"), "/usr/local/bin");
    }

    #[test]
    fn test_escape_whitespace_triggers_quoting() {
        assert_eq!(escape("hello world"), "\"hello world\"");
        assert_eq!(escape("tab\there"), "\"tab\there\"");
    }

    #[test]
    fn test_escape_quotes_inside_quoted_string() {
        assert_eq!(escape("hello \"john\""), "\"hello \\\"john\\\"\"");
    }

    #[test]
    fn test_quotes_without_whitespace_pass_through() {
        // Quoting only kicks in on whitespace; a bare quote stays as-is.
        assert_eq!(escape("he\"llo"), "he\"llo");
    }

    #[test]
    fn test_escape_borrows_when_unquoted() {
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert!(matches!(escape("has space"), Cow::Owned(_)));
    }
}
