//! Outcome of normalizing one edit.

use std::borrow::Cow;

/// Verdict on a proposed field value.
///
/// `Accepted` borrows from the input whenever the text passes through
/// unchanged, and owns a rewritten string otherwise.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decision<'a> {
    /// Discard the edit: the field keeps its previous value and no change
    /// notification is sent.
    Rejected,
    /// Show this text and notify listeners once with it.
    Accepted(Cow<'a, str>),
}

impl<'a> Decision<'a> {
    #[inline]
    pub fn accepted(text: impl Into<Cow<'a, str>>) -> Self {
        Decision::Accepted(text.into())
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted(_))
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Decision::Rejected)
    }

    /// The accepted text, or `None` if the edit was rejected.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match self {
            Decision::Accepted(text) => Some(text),
            Decision::Rejected => None,
        }
    }

    pub fn into_text(self) -> Option<Cow<'a, str>> {
        match self {
            Decision::Accepted(text) => Some(text),
            Decision::Rejected => None,
        }
    }

    /// Detach from the input string.
    pub fn into_owned(self) -> Decision<'static> {
        match self {
            Decision::Accepted(text) => Decision::Accepted(Cow::Owned(text.into_owned())),
            Decision::Rejected => Decision::Rejected,
        }
    }
}
