//! Store trait seen by rendering layers.
//!
//! Widgets drive a field through [`FieldStore`] rather than the concrete
//! [`NumberFieldStore`](crate::NumberFieldStore), so a host can wrap the store
//! (for undo, recording, or tests) without the widget noticing.
//!
//! Change notification goes through a `&mut dyn FnMut(FieldChange)` so the
//! trait stays object-safe and a plain closure is enough for the common case.

use crate::event::{EditOutcome, FieldChange};
use crate::id::FieldId;
use crate::selection::SelectionRange;
use crate::variant::FieldVariant;
use number_input::Constraints;

/// The operations a numeric field widget needs.
///
/// ```ignore
/// fn on_text_changed(store: &mut dyn FieldStore, id: FieldId, text: &str) {
///     let _ = store.propose(id, text, &mut |change| log::info!("{change:?}"));
/// }
/// ```
pub trait FieldStore {
    // =========================================================================
    // Read-only access
    // =========================================================================

    fn get(&self, id: FieldId) -> Option<&str>;

    /// `(value, caret, selection)` for rendering.
    fn get_state(&self, id: FieldId) -> Option<(&str, usize, Option<SelectionRange>)>;

    fn value_revision(&self, id: FieldId) -> u64;

    fn variant(&self, id: FieldId) -> Option<FieldVariant>;

    fn constraints(&self, id: FieldId) -> Option<Constraints>;

    // =========================================================================
    // Editing
    // =========================================================================

    /// Propose a whole new value. See [`NumberFieldStore::propose`](crate::NumberFieldStore::propose).
    fn propose(
        &mut self,
        id: FieldId,
        raw: &str,
        notify: &mut dyn FnMut(FieldChange),
    ) -> EditOutcome;

    fn insert_text(
        &mut self,
        id: FieldId,
        s: &str,
        notify: &mut dyn FnMut(FieldChange),
    ) -> EditOutcome;

    fn backspace(&mut self, id: FieldId, notify: &mut dyn FnMut(FieldChange)) -> EditOutcome;

    fn delete(&mut self, id: FieldId, notify: &mut dyn FnMut(FieldChange)) -> EditOutcome;

    // =========================================================================
    // Caret & selection
    // =========================================================================

    fn move_caret_left(&mut self, id: FieldId, selecting: bool);

    fn move_caret_right(&mut self, id: FieldId, selecting: bool);

    fn move_caret_to_start(&mut self, id: FieldId, selecting: bool);

    fn move_caret_to_end(&mut self, id: FieldId, selecting: bool);

    fn select_all(&mut self, id: FieldId);

    fn set_caret(&mut self, id: FieldId, caret: usize, selecting: bool);
}

impl FieldStore for crate::store::NumberFieldStore {
    #[inline]
    fn get(&self, id: FieldId) -> Option<&str> {
        crate::store::NumberFieldStore::get(self, id)
    }

    #[inline]
    fn get_state(&self, id: FieldId) -> Option<(&str, usize, Option<SelectionRange>)> {
        crate::store::NumberFieldStore::get_state(self, id)
    }

    #[inline]
    fn value_revision(&self, id: FieldId) -> u64 {
        crate::store::NumberFieldStore::value_revision(self, id)
    }

    #[inline]
    fn variant(&self, id: FieldId) -> Option<FieldVariant> {
        crate::store::NumberFieldStore::variant(self, id)
    }

    #[inline]
    fn constraints(&self, id: FieldId) -> Option<Constraints> {
        crate::store::NumberFieldStore::constraints(self, id)
    }

    #[inline]
    fn propose(
        &mut self,
        id: FieldId,
        raw: &str,
        notify: &mut dyn FnMut(FieldChange),
    ) -> EditOutcome {
        crate::store::NumberFieldStore::propose(self, id, raw, notify)
    }

    #[inline]
    fn insert_text(
        &mut self,
        id: FieldId,
        s: &str,
        notify: &mut dyn FnMut(FieldChange),
    ) -> EditOutcome {
        crate::store::NumberFieldStore::insert_text(self, id, s, notify)
    }

    #[inline]
    fn backspace(&mut self, id: FieldId, notify: &mut dyn FnMut(FieldChange)) -> EditOutcome {
        crate::store::NumberFieldStore::backspace(self, id, notify)
    }

    #[inline]
    fn delete(&mut self, id: FieldId, notify: &mut dyn FnMut(FieldChange)) -> EditOutcome {
        crate::store::NumberFieldStore::delete(self, id, notify)
    }

    #[inline]
    fn move_caret_left(&mut self, id: FieldId, selecting: bool) {
        crate::store::NumberFieldStore::move_caret_left(self, id, selecting)
    }

    #[inline]
    fn move_caret_right(&mut self, id: FieldId, selecting: bool) {
        crate::store::NumberFieldStore::move_caret_right(self, id, selecting)
    }

    #[inline]
    fn move_caret_to_start(&mut self, id: FieldId, selecting: bool) {
        crate::store::NumberFieldStore::move_caret_to_start(self, id, selecting)
    }

    #[inline]
    fn move_caret_to_end(&mut self, id: FieldId, selecting: bool) {
        crate::store::NumberFieldStore::move_caret_to_end(self, id, selecting)
    }

    #[inline]
    fn select_all(&mut self, id: FieldId) {
        crate::store::NumberFieldStore::select_all(self, id)
    }

    #[inline]
    fn set_caret(&mut self, id: FieldId, caret: usize, selecting: bool) {
        crate::store::NumberFieldStore::set_caret(self, id, caret, selecting)
    }
}
