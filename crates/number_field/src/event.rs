//! What a store reports back to its host after an edit.

use crate::id::FieldId;

/// A committed value, delivered to the host's change listener.
///
/// Exactly one is emitted per accepted edit, and none for a rejected one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub id: FieldId,
    pub value: String,
}

/// Result of routing an edit through a field.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The normalized text was stored and one [`FieldChange`] was emitted.
    Committed,
    /// The edit was rejected. Value, caret and selection are untouched and
    /// nothing was emitted.
    Suppressed,
    /// The edit would not produce a new candidate (e.g. backspace at the
    /// start of the text).
    NoOp,
    /// No field is registered under this id.
    UnknownField,
}

impl EditOutcome {
    #[inline]
    pub fn is_committed(self) -> bool {
        self == EditOutcome::Committed
    }
}
