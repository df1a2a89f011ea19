use egui::{Align, CornerRadius, Frame, Margin, Response, Stroke, TextEdit, Ui};
use number_core::{FieldBinding, NumberField};
use std::hash::Hash;

#[derive(Debug, Clone, Copy)]
pub struct NumberInputConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for NumberInputConfig {
    fn default() -> Self {
        Self {
            width: 280.0,
            height: 32.0,
        }
    }
}

/// Single-line text field bound to a [`NumberField`].
///
/// egui edits a scratch copy of the field's display text; any change is fed
/// back through [`NumberField::edit`], so next frame shows the normalized
/// text and the binding has been notified once.
pub fn number_input<B: FieldBinding + ?Sized>(
    ui: &mut Ui,
    id_salt: impl Hash,
    field: &mut NumberField,
    binding: &mut B,
) -> Response {
    number_input_with_config(ui, id_salt, field, binding, NumberInputConfig::default())
}

pub fn number_input_with_config<B: FieldBinding + ?Sized>(
    ui: &mut Ui,
    id_salt: impl Hash,
    field: &mut NumberField,
    binding: &mut B,
    config: NumberInputConfig,
) -> Response {
    let h = config.height.max(1.0);
    let placeholder = field.placeholder();
    let mut text = field.display().to_owned();

    let resp = Frame::new()
        .stroke(Stroke::new(
            1.0,
            ui.visuals().widgets.inactive.bg_stroke.color,
        ))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(6, 4))
        .show(ui, |ui| {
            ui.add_sized(
                [config.width.max(1.0), h - 8.0],
                TextEdit::singleline(&mut text)
                    .id_salt(id_salt)
                    .hint_text(placeholder)
                    .vertical_align(Align::Center),
            )
        })
        .inner;

    if resp.changed() {
        field.edit(&text, binding);
        // This pass painted the raw text; redo it with the normalized one.
        if field.display() != text {
            ui.ctx().request_discard("number input normalized");
        }
    }

    resp
}
