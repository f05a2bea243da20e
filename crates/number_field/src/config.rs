use crate::variant::FieldVariant;
use number_input::Constraints;

/// Everything a host supplies when it registers a field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldConfig {
    pub constraints: Constraints,
    pub variant: FieldVariant,
}

impl FieldConfig {
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            variant: FieldVariant::default(),
        }
    }

    pub fn with_variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }
}
