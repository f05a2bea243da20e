//! # number_field
//!
//! UI-agnostic state for numeric text fields.
//!
//! This crate provides the pieces a host needs to run numeric inputs:
//! - [`FieldId`]: An opaque identifier for a field
//! - [`NumberFieldStore`]: Values, carets and selections, with every edit
//!   validated by [`number_input::normalize`]
//! - [`FieldChange`]: The notification a host receives once per accepted edit
//! - [`FieldVariant`]: The visual style a field asks its renderer for
//!
//! ## Design Principles
//!
//! This crate does not depend on any graphics framework or layout system.
//! Rendering lives in `number_field_egui`, which talks to the store through
//! the [`FieldStore`] trait.
//!
//! A field's value is always text its constraints accept: edits that
//! `normalize` rejects are dropped whole, with value, caret and selection
//! left untouched.

mod config;
mod event;
mod id;
mod selection;
mod state;
mod store;
mod text;
mod traits;
mod variant;

pub use config::FieldConfig;
pub use event::{EditOutcome, FieldChange};
pub use id::FieldId;
pub use selection::SelectionRange;
pub use store::NumberFieldStore;
pub use traits::FieldStore;
pub use variant::FieldVariant;

// Caret helpers for integration layers that map pointer positions to offsets.
pub use text::{clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary};
