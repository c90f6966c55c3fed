//! Shared utility functions.

use std::borrow::Cow;

/// Shorten a string to at most `max_chars` characters for log output,
/// marking the cut with a trailing ellipsis.
///
/// Counts characters rather than bytes, so multibyte text is never split
/// mid-character. Strings that already fit are returned borrowed.
pub fn preview(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &s[..cut])),
        None => Cow::Borrowed(s),
    }
}
