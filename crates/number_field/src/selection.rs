//! Selection within a field's text.

use crate::text::{clamp_to_char_boundary, next_cursor_boundary, prev_cursor_boundary};

/// A selected byte range, always ordered so `start <= end`.
///
/// Offsets produced by [`NumberFieldStore`](crate::NumberFieldStore) sit on
/// UTF-8 character boundaries of the field value they were read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Build a range from two endpoints in either order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// The empty range at `caret`.
    #[inline]
    pub fn collapsed(caret: usize) -> Self {
        Self::new(caret, caret)
    }

    /// The range between `anchor` and `caret` in `value`, both moved onto
    /// char boundaries. `None` without an anchor or when the two coincide.
    pub fn from_anchor(value: &str, anchor: Option<usize>, caret: usize) -> Option<Self> {
        let anchor = clamp_to_char_boundary(value, anchor?);
        let caret = clamp_to_char_boundary(value, caret);
        (anchor != caret).then(|| Self::new(anchor, caret))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// What backspace removes: the range itself, or the character before an
    /// empty range. `None` at the start of the text.
    pub fn for_backspace(self, value: &str) -> Option<Self> {
        if !self.is_empty() {
            return Some(self);
        }
        (self.start > 0).then(|| Self::new(prev_cursor_boundary(value, self.start), self.end))
    }

    /// What delete removes: the range itself, or the character after an
    /// empty range. `None` at the end of the text.
    pub fn for_delete(self, value: &str) -> Option<Self> {
        if !self.is_empty() {
            return Some(self);
        }
        (self.end < value.len())
            .then(|| Self::new(self.start, next_cursor_boundary(value, self.end)))
    }
}
