use crate::style::VariantStyle;
use egui::{Response, Stroke, TextEdit, Ui};
use number_field::{EditOutcome, FieldChange, FieldId, FieldStore};
use number_input::Constraints;

/// Show the numeric field `id` from `store`.
///
/// The text edit works on a scratch copy of the stored value. When the user
/// changes it, the scratch text is proposed to the store; a rejected edit is
/// simply dropped and the next frame shows the stored value again.
///
/// `Response::changed` reports that the user edited the text, not that the
/// edit was committed. Committed values arrive through `notify`.
pub fn number_field<S: FieldStore + ?Sized>(
    ui: &mut Ui,
    store: &mut S,
    id: FieldId,
    notify: &mut dyn FnMut(FieldChange),
) -> Response {
    let Some(value) = store.get(id) else {
        log::debug!(target: "number_field.egui", "{id}: not registered");
        let mut empty = String::new();
        return ui.add_enabled(false, TextEdit::singleline(&mut empty).id_salt(id));
    };

    let mut buffer = value.to_owned();
    let variant = store.variant(id).unwrap_or_default();
    let hint = store.constraints(id).map(|c| placeholder(&c)).unwrap_or_default();
    let style = VariantStyle::for_variant(variant, ui.visuals());

    let framed = style.frame().show(ui, |ui| {
        ui.add(
            TextEdit::singleline(&mut buffer)
                .id_salt(id)
                .frame(false)
                .hint_text(hint),
        )
    });
    let response = framed.inner;

    if let Some(idle) = style.underline {
        let stroke = if response.has_focus() {
            Stroke::new(2.0, ui.visuals().selection.stroke.color)
        } else {
            idle
        };
        let rect = framed.response.rect;
        ui.painter().hline(rect.x_range(), rect.bottom(), stroke);
    }

    if response.changed() && store.propose(id, &buffer, notify) == EditOutcome::Suppressed {
        log::trace!(target: "number_field.egui", "{id}: dropped edit {buffer:?}");
    }
    response
}

/// Hint shown in an empty field, e.g. `0.00` for two decimal places.
fn placeholder(constraints: &Constraints) -> String {
    match (constraints.allow_decimal, constraints.max_dp) {
        (false, _) | (true, Some(0)) => "0".to_owned(),
        (true, Some(dp)) => format!("0.{}", "0".repeat(dp.min(8) as usize)),
        (true, None) => String::new(),
    }
}
