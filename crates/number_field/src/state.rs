//! Per-field state kept by the store.

use crate::variant::FieldVariant;
use number_input::Constraints;

/// State for one numeric field.
///
/// Managed by [`NumberFieldStore`](crate::NumberFieldStore); never exposed.
#[derive(Clone, Debug)]
pub(crate) struct FieldState {
    /// Last accepted text. Always a fixed point of `normalize` under the
    /// constraints it was accepted with.
    pub value: String,

    /// Bumped whenever `value` changes.
    pub value_rev: u64,

    /// Byte index into `value`, on a char boundary.
    pub caret: usize,

    /// When `Some(anchor)`, the selection is `min(anchor, caret)..max(anchor, caret)`.
    pub selection_anchor: Option<usize>,

    pub constraints: Constraints,
    pub variant: FieldVariant,
}

impl FieldState {
    pub fn new(value: String, constraints: Constraints, variant: FieldVariant) -> Self {
        let caret = value.len();
        Self {
            value,
            value_rev: 0,
            caret,
            selection_anchor: None,
            constraints,
            variant,
        }
    }
}
