//! Presentation styles for a numeric field.

use std::fmt;

/// How a field is drawn. Validation never depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldVariant {
    /// Bordered box.
    #[default]
    Outlined,
    /// Shaded background, no border.
    Filled,
    /// Bare text with an underline.
    Standard,
}

impl FieldVariant {
    pub const ALL: [FieldVariant; 3] = [
        FieldVariant::Outlined,
        FieldVariant::Filled,
        FieldVariant::Standard,
    ];

    /// Parse a variant name, ignoring ASCII case and surrounding whitespace.
    ///
    /// A blank name selects the default; an unknown name returns `None`.
    ///
    /// ```
    /// use number_field::FieldVariant;
    ///
    /// assert_eq!(FieldVariant::from_name(" Filled "), Some(FieldVariant::Filled));
    /// assert_eq!(FieldVariant::from_name(""), Some(FieldVariant::Outlined));
    /// assert_eq!(FieldVariant::from_name("raised"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Some(Self::default());
        }
        Self::ALL
            .into_iter()
            .find(|v| name.eq_ignore_ascii_case(v.name()))
    }

    pub const fn name(self) -> &'static str {
        match self {
            FieldVariant::Outlined => "outlined",
            FieldVariant::Filled => "filled",
            FieldVariant::Standard => "standard",
        }
    }
}

impl fmt::Display for FieldVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
