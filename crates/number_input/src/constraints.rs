//! Per-field numeric constraints.

use std::fmt;

/// How surplus fractional digits are removed once `max_dp` is exceeded.
///
/// Both policies operate on the typed decimal digits, not on a scaled float,
/// so values such as `1.005` are handled exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrecisionPolicy {
    /// Drop the surplus digits (round toward zero): `7.5489` → `7.54`.
    #[default]
    Truncate,
    /// Round at the boundary digit, ties away from zero: `7.5489` → `7.55`.
    HalfAwayFromZero,
}

/// Validation rules for a numeric text field.
///
/// The default allows decimals and imposes no bounds or precision limit.
///
/// ```
/// use number_input::Constraints;
///
/// let c = Constraints::default().with_min(0.0).with_max(100.0).with_max_dp(2);
/// assert!(c.allow_decimal);
/// assert_eq!(c.min, Some(0.0));
/// assert!(c.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Constraints {
    /// Permit a fractional part. When `false`, text is reduced to an integer.
    pub allow_decimal: bool,
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
    /// Maximum number of digits after the decimal point.
    pub max_dp: Option<u32>,
    /// Applied when `max_dp` is exceeded.
    pub precision: PrecisionPolicy,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            allow_decimal: true,
            min: None,
            max: None,
            max_dp: None,
            precision: PrecisionPolicy::Truncate,
        }
    }
}

impl Constraints {
    /// Integers only, no bounds.
    pub fn integers() -> Self {
        Self {
            allow_decimal: false,
            ..Self::default()
        }
    }

    pub fn with_allow_decimal(mut self, allow_decimal: bool) -> Self {
        self.allow_decimal = allow_decimal;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_max_dp(mut self, max_dp: u32) -> Self {
        self.max_dp = Some(max_dp);
        self
    }

    pub fn with_precision(mut self, precision: PrecisionPolicy) -> Self {
        self.precision = precision;
        self
    }

    /// Check the bounds for configuration mistakes.
    ///
    /// [`normalize`](crate::normalize) never requires this: a NaN bound simply
    /// never rejects anything. Hosts call it when a field is registered so a
    /// misconfigured field fails loudly instead of accepting everything.
    pub fn validate(&self) -> Result<(), ConstraintsError> {
        if self.min.is_some_and(f64::is_nan) {
            return Err(ConstraintsError::NanBound { bound: Bound::Min });
        }
        if self.max.is_some_and(f64::is_nan) {
            return Err(ConstraintsError::NanBound { bound: Bound::Max });
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(ConstraintsError::InvertedBounds { min, max });
        }
        Ok(())
    }

    /// Returns `true` if some negative value can satisfy the lower bound.
    #[inline]
    pub fn permits_negative(&self) -> bool {
        !matches!(self.min, Some(min) if min >= 0.0)
    }

    /// Returns `true` if some positive value can satisfy the upper bound.
    #[inline]
    pub fn permits_positive(&self) -> bool {
        !matches!(self.max, Some(max) if max <= 0.0)
    }

    /// First bound that `value` violates, if any. NaN violates everything.
    pub(crate) fn violation(&self, value: f64) -> Option<Violation> {
        if value.is_nan() {
            return Some(Violation::NotANumber);
        }
        if let Some(min) = self.min
            && value < min
        {
            return Some(Violation::BelowMin(min));
        }
        if let Some(max) = self.max
            && value > max
        {
            return Some(Violation::AboveMax(max));
        }
        None
    }
}

/// Reason an edit failed the bounds gate. Only used for trace output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Violation {
    NotANumber,
    BelowMin(f64),
    AboveMax(f64),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotANumber => f.write_str("not a number"),
            Violation::BelowMin(min) => write!(f, "below min {min}"),
            Violation::AboveMax(max) => write!(f, "above max {max}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => f.write_str("min"),
            Bound::Max => f.write_str("max"),
        }
    }
}

/// A [`Constraints`] record that cannot describe a usable field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstraintsError {
    NanBound { bound: Bound },
    InvertedBounds { min: f64, max: f64 },
}

impl fmt::Display for ConstraintsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintsError::NanBound { bound } => write!(f, "{bound} bound is NaN"),
            ConstraintsError::InvertedBounds { min, max } => {
                write!(f, "min {min} is greater than max {max}")
            }
        }
    }
}

impl std::error::Error for ConstraintsError {}
