use crate::error::DemoError;
use crate::spec::FormSpec;
use app_api::UiApp;
use egui::{CentralPanel, Color32, Context, RichText, Ui};
use form_state::{FieldId, FieldRules, FormController, FormData, FormErrors};
use gfx::ui::{form_actions, number_input};
use number_core::{FieldConfig, NumberField};

/// Outcome of the latest submit attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Submitted(FormData),
    Rejected(FormErrors),
}

struct FieldRow {
    id: FieldId,
    label: String,
    config: FieldConfig,
    field: NumberField,
}

pub struct FormDemoApp {
    title: String,
    form: FormController,
    rows: Vec<FieldRow>,
    status: Status,
}

impl FormDemoApp {
    /// Register and mount every field of `spec`.
    ///
    /// Fails on the first field with an unknown mode or a duplicate name.
    pub fn from_spec(spec: FormSpec) -> Result<Self, DemoError> {
        let mut form = FormController::new();
        let mut rows = Vec::with_capacity(spec.fields.len());

        for field_spec in &spec.fields {
            let config =
                FieldConfig::try_from(&field_spec.config).map_err(|source| DemoError::Config {
                    field: field_spec.name.clone(),
                    source,
                })?;
            let rules = FieldRules {
                required: field_spec.required,
            };
            let id = form.register(field_spec.name.clone(), rules)?;
            let field = NumberField::mount(config, &mut form.binding(id));

            rows.push(FieldRow {
                id,
                label: field_spec.label().to_string(),
                config,
                field,
            });
        }

        log::info!(target: "demo", "form {:?} ready with {} field(s)", spec.title, rows.len());
        Ok(Self {
            title: spec.title,
            form,
            rows,
            status: Status::Idle,
        })
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Current display text of the named field.
    pub fn display_of(&self, name: &str) -> Option<&str> {
        let id = self.form.id_of(name)?;
        self.rows
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.field.display())
    }

    /// Feed raw text into the named field, as a keystroke would.
    pub fn edit(&mut self, name: &str, raw: &str) -> bool {
        let Some(id) = self.form.id_of(name) else {
            return false;
        };
        let Some(row) = self.rows.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        row.field.edit(raw, &mut self.form.binding(id));
        true
    }

    pub fn submit(&mut self) -> &Status {
        self.status = match self.form.handle_submit() {
            Ok(data) => {
                log::info!(target: "demo", "submitted: {}", describe(&data));
                Status::Submitted(data)
            }
            Err(errors) => {
                log::warn!(target: "demo", "got errors: {errors}");
                Status::Rejected(errors)
            }
        };
        &self.status
    }

    /// Clear the form and remount every field from its configuration.
    pub fn reset(&mut self) {
        self.form.reset();
        for row in &mut self.rows {
            row.field = NumberField::mount(row.config, &mut self.form.binding(row.id));
        }
        self.status = Status::Idle;
    }

    fn field_rows(&mut self, ui: &mut Ui) {
        let errors = match &self.status {
            Status::Rejected(errors) => Some(errors.clone()),
            _ => None,
        };

        for row in &mut self.rows {
            ui.label(&row.label);
            number_input(
                ui,
                row.id.as_raw(),
                &mut row.field,
                &mut self.form.binding(row.id),
            );

            let name = self.form.name(row.id).unwrap_or_default();
            if let Some(error) = errors.as_ref().and_then(|e| e.get(name)) {
                ui.label(RichText::new(error.to_string()).color(Color32::LIGHT_RED));
            }
            ui.add_space(6.0);
        }
    }

    fn status_line(&self, ui: &mut Ui) {
        match &self.status {
            Status::Idle => {}
            Status::Submitted(data) => {
                ui.label(format!("Submitted: {}", describe(data)));
            }
            Status::Rejected(errors) => {
                ui.label(
                    RichText::new(format!("{} field(s) need attention", errors.len()))
                        .color(Color32::LIGHT_RED),
                );
            }
        }
    }
}

impl UiApp for FormDemoApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn ui(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);
            ui.add_space(8.0);

            self.field_rows(ui);

            let intent = form_actions(ui, !self.rows.is_empty());
            if intent.submit {
                self.submit();
            }
            if intent.reset {
                self.reset();
            }

            self.status_line(ui);
        });
    }
}

fn describe(data: &FormData) -> String {
    let parts: Vec<String> = data
        .iter()
        .map(|(name, value)| match value {
            Some(v) => format!("{name}={v}"),
            None => format!("{name}=null"),
        })
        .collect();
    format!("{{{}}}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::FieldSpec;
    use form_state::FieldError;
    use number_core::RawFieldConfig;

    fn field(name: &str, mode: &str, initial_value: Option<f64>, required: bool) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            label: None,
            required,
            config: RawFieldConfig {
                mode: mode.to_string(),
                decimal_places: None,
                initial_value,
            },
        }
    }

    fn spec(fields: Vec<FieldSpec>) -> FormSpec {
        FormSpec {
            title: "test".to_string(),
            fields,
        }
    }

    #[test]
    fn default_form_seeds_and_submits() {
        let mut app = FormDemoApp::from_spec(FormSpec::default()).unwrap();
        assert_eq!(app.display_of("numberInput"), Some("27"));

        assert!(app.edit("numberInput", "3.9"));
        assert_eq!(app.display_of("numberInput"), Some("39"));

        match app.submit() {
            Status::Submitted(data) => assert_eq!(data.get("numberInput"), Some(Some(39.0))),
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[test]
    fn unknown_mode_fails_construction() {
        let err = FormDemoApp::from_spec(spec(vec![field("rate", "percent", None, false)]))
            .err()
            .unwrap();
        match err {
            DemoError::Config { field, .. } => assert_eq!(field, "rate"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_name_fails_construction() {
        let result = FormDemoApp::from_spec(spec(vec![
            field("qty", "whole", None, false),
            field("qty", "integer", None, false),
        ]));
        assert!(matches!(result, Err(DemoError::Form(_))));
    }

    #[test]
    fn rejected_submission_then_reset() {
        let mut app =
            FormDemoApp::from_spec(spec(vec![field("qty", "whole", Some(5.0), true)])).unwrap();
        app.edit("qty", "-1");
        assert_eq!(app.display_of("qty"), Some(""));

        match app.submit() {
            Status::Rejected(errors) => assert_eq!(errors.get("qty"), Some(FieldError::Required)),
            other => panic!("unexpected status: {other:?}"),
        }

        app.reset();
        assert_eq!(app.status(), &Status::Idle);
        assert_eq!(app.display_of("qty"), Some("5"));
        assert_eq!(app.form().value(app.form().id_of("qty").unwrap()), Some(5.0));
    }

    #[test]
    fn edit_unknown_field_is_ignored() {
        let mut app = FormDemoApp::from_spec(FormSpec::default()).unwrap();
        assert!(!app.edit("missing", "1"));
    }

    #[test]
    fn describe_renders_empty_as_null() {
        let mut app = FormDemoApp::from_spec(spec(vec![
            field("a", "integer", Some(-2.0), false),
            field("b", "decimal", None, false),
        ]))
        .unwrap();
        let data = match app.submit() {
            Status::Submitted(data) => data.clone(),
            other => panic!("unexpected status: {other:?}"),
        };
        assert_eq!(describe(&data), "{a=-2, b=null}");
    }

    #[test]
    fn renders_headless() {
        let mut app = FormDemoApp::from_spec(FormSpec::default()).unwrap();
        let ctx = Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
        assert_eq!(app.display_of("numberInput"), Some("27"));
        assert_eq!(app.status(), &Status::Idle);
    }
}
