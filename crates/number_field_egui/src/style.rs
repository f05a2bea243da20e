use egui::{Color32, CornerRadius, Frame, Margin, Stroke, Visuals};
use number_field::FieldVariant;

/// Frame and underline settings for one [`FieldVariant`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantStyle {
    pub fill: Color32,
    pub stroke: Stroke,
    /// Drawn along the bottom edge of the frame, if any.
    pub underline: Option<Stroke>,
    pub corner_radius: u8,
}

impl VariantStyle {
    pub fn for_variant(variant: FieldVariant, visuals: &Visuals) -> Self {
        let idle = Stroke::new(1.0, visuals.widgets.inactive.bg_stroke.color);
        match variant {
            FieldVariant::Outlined => Self {
                fill: Color32::TRANSPARENT,
                stroke: idle,
                underline: None,
                corner_radius: 6,
            },
            FieldVariant::Filled => Self {
                fill: visuals.extreme_bg_color,
                stroke: Stroke::NONE,
                underline: None,
                corner_radius: 6,
            },
            FieldVariant::Standard => Self {
                fill: Color32::TRANSPARENT,
                stroke: Stroke::NONE,
                underline: Some(idle),
                corner_radius: 0,
            },
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::new()
            .fill(self.fill)
            .stroke(self.stroke)
            .corner_radius(CornerRadius::same(self.corner_radius))
            .inner_margin(Margin::symmetric(6, 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlined_has_a_border_and_no_fill() {
        let visuals = Visuals::dark();
        let style = VariantStyle::for_variant(FieldVariant::Outlined, &visuals);
        assert_eq!(style.fill, Color32::TRANSPARENT);
        assert_eq!(style.stroke.color, visuals.widgets.inactive.bg_stroke.color);
        assert!(style.underline.is_none());
    }

    #[test]
    fn filled_uses_the_text_edit_background() {
        let visuals = Visuals::light();
        let style = VariantStyle::for_variant(FieldVariant::Filled, &visuals);
        assert_eq!(style.fill, visuals.extreme_bg_color);
        assert_eq!(style.stroke, Stroke::NONE);
    }

    #[test]
    fn standard_is_only_an_underline() {
        let visuals = Visuals::dark();
        let style = VariantStyle::for_variant(FieldVariant::Standard, &visuals);
        assert_eq!(style.stroke, Stroke::NONE);
        assert_eq!(style.corner_radius, 0);
        assert!(style.underline.is_some());
    }

    #[test]
    fn every_variant_looks_different() {
        let visuals = Visuals::dark();
        let styles: Vec<_> = FieldVariant::ALL
            .into_iter()
            .map(|v| VariantStyle::for_variant(v, &visuals))
            .collect();
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
    }
}
