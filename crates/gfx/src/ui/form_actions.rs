use egui::{Button, Ui};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormIntent {
    pub submit: bool,
    pub reset: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FormActionsConfig {
    pub height: f32,
}

impl Default for FormActionsConfig {
    fn default() -> Self {
        Self { height: 28.0 }
    }
}

pub fn form_actions(ui: &mut Ui, can_reset: bool) -> FormIntent {
    form_actions_with_config(ui, can_reset, FormActionsConfig::default())
}

pub fn form_actions_with_config(
    ui: &mut Ui,
    can_reset: bool,
    config: FormActionsConfig,
) -> FormIntent {
    let mut intent = FormIntent::default();
    let h = config.height.max(1.0);

    ui.horizontal(|ui| {
        if ui.add(Button::new("Submit").min_size([h * 3.0, h].into())).clicked() {
            intent.submit = true;
        }
        if ui
            .add_enabled(can_reset, Button::new("Reset").min_size([h * 3.0, h].into()))
            .clicked()
        {
            intent.reset = true;
        }
    });

    intent
}
