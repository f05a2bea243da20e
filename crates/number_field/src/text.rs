//! UTF-8 helpers for caret handling and building candidate values.
//!
//! Accepted values are ASCII, but candidates are built from whatever the
//! user typed or pasted, so every offset still has to respect char
//! boundaries.

use std::borrow::Cow;

/// Move `index` back onto a char boundary of `s`, clamping to `s.len()`.
///
/// ```
/// use number_field::clamp_to_char_boundary;
///
/// let s = "1€"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 99), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Char boundary immediately before `i`, or 0.
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// Char boundary immediately after `i`, or `s.len()`.
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |c| i + c.len_utf8())
}

/// Strip CR and LF; numeric fields are single-line.
///
/// Borrows when there is nothing to strip.
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}

/// `value` with `start..end` replaced by `insert`.
///
/// Both offsets must be char boundaries with `start <= end`.
pub(crate) fn splice(value: &str, start: usize, end: usize, insert: &str) -> String {
    let mut out = String::with_capacity(value.len() - (end - start) + insert.len());
    out.push_str(&value[..start]);
    out.push_str(insert);
    out.push_str(&value[end..]);
    out
}
