//! # number_input
//!
//! Whole-value normalization for numeric text fields.
//!
//! A host text field calls [`normalize`] with the full text a keystroke (or
//! any other edit) would produce. The returned [`Decision`] either rejects the
//! edit, in which case the field keeps its previous value and nobody is
//! notified, or accepts it with the text the field should actually show.
//!
//! ```
//! use number_input::{Constraints, Decision, normalize};
//!
//! let price = Constraints::default().with_min(0.0).with_max_dp(2);
//!
//! assert_eq!(normalize("12.", &price), Decision::accepted("12."));
//! assert_eq!(normalize("12.999", &price), Decision::accepted("12.99"));
//! assert_eq!(normalize("-3", &price), Decision::Rejected);
//! ```
//!
//! ## Design
//!
//! - Pure: no state is kept between calls, and the constraints passed to the
//!   current call are the only ones consulted.
//! - Parsing is an explicit prefix scan ([`scan_numeral`]) rather than a
//!   lenient library parse, so behavior does not depend on `f64::from_str`.
//! - Decimal-place clamping works on the typed digits, never on a scaled
//!   float, so `x.xx5` boundaries are exact.
//! - Rejections are logged at `trace` level under the
//!   `number_input.normalize` target; nothing else is reported.

mod constraints;
mod decision;
mod normalize;
mod precision;
mod scan;

pub use constraints::{Bound, Constraints, ConstraintsError, PrecisionPolicy};
pub use decision::Decision;
pub use normalize::normalize;
pub use scan::{Numeral, ScanMode, scan_numeral};
