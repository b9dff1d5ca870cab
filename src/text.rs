//! First-token truncation.
//!
//! Whitespace follows `char::is_whitespace`, i.e. the Unicode `White_Space`
//! property, so non-breaking and ideographic spaces separate tokens too.

/// Returns the first whitespace-delimited token of `text`.
///
/// Absent, empty and whitespace-only values all yield `""`.
///
/// # Example
///
/// ```rust
/// use html_cleaner::text::first_token;
///
/// assert_eq!(first_token(Some("  Hello world ")), "Hello");
/// assert_eq!(first_token(Some(" \n\t ")), "");
/// assert_eq!(first_token(None), "");
/// ```
#[inline]
#[must_use]
pub fn first_token(text: Option<&str>) -> &str {
    text.and_then(|t| t.split_whitespace().next())
        .unwrap_or_default()
}

/// Whether `text` already holds at most one token.
#[inline]
#[must_use]
pub fn is_token(text: &str) -> bool {
    !text.chars().any(char::is_whitespace)
}
