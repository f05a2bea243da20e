//! Central store for numeric field values, carets and selections.
//!
//! Every edit is turned into the full candidate value it would produce and
//! run through [`number_input::normalize`]. Rejected candidates leave the
//! field exactly as it was; accepted ones are committed in their normalized
//! form and reported to the host once.
//!
//! The store does no layout or measurement. Integration layers translate
//! pointer positions into byte offsets before calling [`NumberFieldStore::set_caret`].

use crate::config::FieldConfig;
use crate::event::{EditOutcome, FieldChange};
use crate::id::FieldId;
use crate::selection::SelectionRange;
use crate::state::FieldState;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
    splice,
};
use crate::variant::FieldVariant;
use number_input::{Constraints, ConstraintsError, Decision, normalize};
use std::collections::HashMap;

/// State for every numeric field a host has registered.
///
/// # Example
///
/// ```
/// use number_field::{FieldConfig, FieldId, NumberFieldStore};
/// use number_input::Constraints;
///
/// let mut store = NumberFieldStore::new();
/// let id = FieldId::from_raw(1);
/// store
///     .ensure_field(id, FieldConfig::new(Constraints::default().with_max(10.0)), "")
///     .unwrap();
///
/// let mut changes = Vec::new();
/// let _ = store.insert_text(id, "7", &mut |c| changes.push(c));
/// let _ = store.insert_text(id, "5", &mut |c| changes.push(c)); // 75 > 10
///
/// assert_eq!(store.get(id), Some("7"));
/// assert_eq!(changes.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NumberFieldStore {
    fields: HashMap<FieldId, FieldState>,
}

impl NumberFieldStore {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Returns `true` if a field is registered under `id`.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Register a field if it is not already known.
    ///
    /// The constraints are validated first. `initial` is normalized like any
    /// other edit; text that would be rejected starts the field empty. An
    /// existing field keeps its value and configuration.
    pub fn ensure_field(
        &mut self,
        id: FieldId,
        config: FieldConfig,
        initial: &str,
    ) -> Result<(), ConstraintsError> {
        config.constraints.validate()?;
        if self.fields.contains_key(&id) {
            return Ok(());
        }

        let value = match normalize(initial, &config.constraints) {
            Decision::Accepted(text) => text.into_owned(),
            Decision::Rejected => {
                log::debug!(
                    target: "number_field.store",
                    "{id}: initial value {initial:?} rejected, starting empty"
                );
                String::new()
            }
        };
        self.fields.insert(
            id,
            FieldState::new(value, config.constraints, config.variant),
        );
        Ok(())
    }

    /// Forget a field.
    pub fn remove(&mut self, id: FieldId) -> bool {
        self.fields.remove(&id).is_some()
    }

    /// Forget every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// The field's current value.
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|st| st.value.as_str())
    }

    pub fn caret(&self, id: FieldId) -> Option<usize> {
        self.fields.get(&id).map(|st| st.caret)
    }

    /// `(value, caret, selection)` for rendering.
    pub fn get_state(&self, id: FieldId) -> Option<(&str, usize, Option<SelectionRange>)> {
        self.fields.get(&id).map(|st| {
            let sel = SelectionRange::from_anchor(&st.value, st.selection_anchor, st.caret);
            (st.value.as_str(), st.caret, sel)
        })
    }

    /// Monotonic counter bumped whenever the value changes.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.fields.get(&id).map_or(0, |st| st.value_rev)
    }

    pub fn variant(&self, id: FieldId) -> Option<FieldVariant> {
        self.fields.get(&id).map(|st| st.variant)
    }

    pub fn constraints(&self, id: FieldId) -> Option<Constraints> {
        self.fields.get(&id).map(|st| st.constraints)
    }

    /// Change a field's constraints. The next edit is judged by them; the
    /// current value is kept as is.
    pub fn set_constraints(
        &mut self,
        id: FieldId,
        constraints: Constraints,
    ) -> Result<(), ConstraintsError> {
        constraints.validate()?;
        if let Some(st) = self.fields.get_mut(&id) {
            st.constraints = constraints;
        }
        Ok(())
    }

    pub fn set_variant(&mut self, id: FieldId, variant: FieldVariant) {
        if let Some(st) = self.fields.get_mut(&id) {
            st.variant = variant;
        }
    }

    /// Set the value programmatically, as a host does when its own model
    /// changes. The text is normalized but no change is emitted.
    ///
    /// Returns `false` if the text was rejected or the field is unknown.
    pub fn set(&mut self, id: FieldId, value: &str) -> bool {
        let Some(st) = self.fields.get_mut(&id) else {
            return false;
        };
        let Decision::Accepted(text) = normalize(value, &st.constraints) else {
            return false;
        };
        let _ = store_value(st, &text);
        st.caret = st.value.len();
        st.selection_anchor = None;
        true
    }

    /// Propose a whole new value, as a native change event delivers it.
    ///
    /// On acceptance the normalized text is stored, the caret moves to its
    /// end (unless the text is unchanged) and `notify` is called exactly once.
    pub fn propose(
        &mut self,
        id: FieldId,
        raw: &str,
        notify: &mut dyn FnMut(FieldChange),
    ) -> EditOutcome {
        let Some(st) = self.fields.get_mut(&id) else {
            return unknown_field(id);
        };
        commit_candidate(id, st, raw, raw.len(), notify)
    }

    /// Type `s` at the caret, replacing any selection. Newlines are dropped.
    pub fn insert_text(
        &mut self,
        id: FieldId,
        s: &str,
        notify: &mut dyn FnMut(FieldChange),
    ) -> EditOutcome {
        let Some(st) = self.fields.get_mut(&id) else {
            return unknown_field(id);
        };
        clamp_state(st);
        let s = filter_single_line(s);
        if s.is_empty() {
            return EditOutcome::NoOp;
        }

        let sel = edit_range(st);
        let candidate = splice(&st.value, sel.start, sel.end, &s);
        commit_candidate(id, st, &candidate, sel.start + s.len(), notify)
    }

    /// Delete the selection, or the character before the caret.
    pub fn backspace(&mut self, id: FieldId, notify: &mut dyn FnMut(FieldChange)) -> EditOutcome {
        let Some(st) = self.fields.get_mut(&id) else {
            return unknown_field(id);
        };
        clamp_state(st);

        let Some(range) = edit_range(st).for_backspace(&st.value) else {
            return EditOutcome::NoOp;
        };
        let candidate = splice(&st.value, range.start, range.end, "");
        commit_candidate(id, st, &candidate, range.start, notify)
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete(&mut self, id: FieldId, notify: &mut dyn FnMut(FieldChange)) -> EditOutcome {
        let Some(st) = self.fields.get_mut(&id) else {
            return unknown_field(id);
        };
        clamp_state(st);

        let Some(range) = edit_range(st).for_delete(&st.value) else {
            return EditOutcome::NoOp;
        };
        let candidate = splice(&st.value, range.start, range.end, "");
        commit_candidate(id, st, &candidate, range.start, notify)
    }

    /// Move the caret one character left. Without `selecting`, an existing
    /// selection collapses to its start instead.
    pub fn move_caret_left(&mut self, id: FieldId, selecting: bool) {
        let Some(st) = self.fields.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        let target = match SelectionRange::from_anchor(&st.value, st.selection_anchor, st.caret) {
            Some(sel) if !selecting => sel.start,
            _ => prev_cursor_boundary(&st.value, st.caret),
        };
        move_caret(st, target, selecting);
    }

    /// Move the caret one character right. Without `selecting`, an existing
    /// selection collapses to its end instead.
    pub fn move_caret_right(&mut self, id: FieldId, selecting: bool) {
        let Some(st) = self.fields.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        let target = match SelectionRange::from_anchor(&st.value, st.selection_anchor, st.caret) {
            Some(sel) if !selecting => sel.end,
            _ => next_cursor_boundary(&st.value, st.caret),
        };
        move_caret(st, target, selecting);
    }

    pub fn move_caret_to_start(&mut self, id: FieldId, selecting: bool) {
        if let Some(st) = self.fields.get_mut(&id) {
            clamp_state(st);
            move_caret(st, 0, selecting);
        }
    }

    pub fn move_caret_to_end(&mut self, id: FieldId, selecting: bool) {
        if let Some(st) = self.fields.get_mut(&id) {
            clamp_state(st);
            let end = st.value.len();
            move_caret(st, end, selecting);
        }
    }

    pub fn select_all(&mut self, id: FieldId) {
        if let Some(st) = self.fields.get_mut(&id) {
            st.selection_anchor = Some(0);
            st.caret = st.value.len();
            normalize_selection_anchor(st);
        }
    }

    /// Put the caret at byte offset `caret` (clamped to a char boundary).
    pub fn set_caret(&mut self, id: FieldId, caret: usize, selecting: bool) {
        if let Some(st) = self.fields.get_mut(&id) {
            clamp_state(st);
            let caret = clamp_to_char_boundary(&st.value, caret);
            move_caret(st, caret, selecting);
        }
    }
}

// --- Internal helper functions ---

fn unknown_field(id: FieldId) -> EditOutcome {
    log::trace!(target: "number_field.store", "{id}: edit for unregistered field");
    EditOutcome::UnknownField
}

/// Normalize `candidate` and, if accepted, commit it with the caret near
/// `caret_hint` and notify once. Rejection leaves `st` untouched.
fn commit_candidate(
    id: FieldId,
    st: &mut FieldState,
    candidate: &str,
    caret_hint: usize,
    notify: &mut dyn FnMut(FieldChange),
) -> EditOutcome {
    let text = match normalize(candidate, &st.constraints) {
        Decision::Accepted(text) => text,
        Decision::Rejected => {
            log::trace!(target: "number_field.store", "{id}: suppressed {candidate:?}");
            return EditOutcome::Suppressed;
        }
    };

    // A keystroke that normalizes away leaves the caret where it was.
    if store_value(st, &text) {
        st.caret = clamp_to_char_boundary(&st.value, caret_hint);
    }
    st.selection_anchor = None;

    notify(FieldChange {
        id,
        value: st.value.clone(),
    });
    EditOutcome::Committed
}

/// Returns `true` if the value changed.
fn store_value(st: &mut FieldState, text: &str) -> bool {
    if st.value == text {
        return false;
    }
    st.value.clear();
    st.value.push_str(text);
    st.value_rev = st.value_rev.wrapping_add(1);
    true
}

/// The range an edit replaces: the selection, or the empty range at the caret.
fn edit_range(st: &FieldState) -> SelectionRange {
    SelectionRange::from_anchor(&st.value, st.selection_anchor, st.caret)
        .unwrap_or(SelectionRange::collapsed(st.caret))
}

fn move_caret(st: &mut FieldState, caret: usize, selecting: bool) {
    if selecting {
        if st.selection_anchor.is_none() {
            st.selection_anchor = Some(st.caret);
        }
        st.caret = caret;
        normalize_selection_anchor(st);
    } else {
        st.caret = caret;
        st.selection_anchor = None;
    }
}

/// Drop a collapsed anchor so the selection does not stick.
fn normalize_selection_anchor(st: &mut FieldState) {
    if let Some(anchor) = st.selection_anchor {
        let anchor = clamp_to_char_boundary(&st.value, anchor);
        st.selection_anchor = (anchor != st.caret).then_some(anchor);
    }
}

fn clamp_state(st: &mut FieldState) {
    st.caret = clamp_to_char_boundary(&st.value, st.caret);
    if let Some(a) = st.selection_anchor {
        st.selection_anchor = Some(clamp_to_char_boundary(&st.value, a));
    }
}
