//! # number_field_egui
//!
//! egui rendering for fields held in a [`number_field`] store.
//!
//! ```ignore
//! let mut changes = Vec::new();
//! number_field_egui::number_field(ui, &mut store, id, &mut |c| changes.push(c));
//! ```
//!
//! Validation happens entirely in the store; this crate only draws the
//! [`FieldVariant`](number_field::FieldVariant) and forwards edits.

mod style;
mod widget;

pub use style::VariantStyle;
pub use widget::number_field;
