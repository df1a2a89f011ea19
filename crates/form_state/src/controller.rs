//! Form controller: field registration, value slots and submission.

use crate::error::{FieldError, FormError, FormErrors};
use crate::id::FieldId;
use number_core::FieldBinding;
use std::collections::HashMap;

/// Submit-time rules for one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
}

impl FieldRules {
    pub const fn required() -> Self {
        Self { required: true }
    }
}

#[derive(Clone, Debug)]
struct FieldEntry {
    name: String,
    rules: FieldRules,
    value: Option<f64>,
}

/// Values collected by a successful submission, in registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormData {
    values: Vec<(String, Option<f64>)>,
}

impl FormData {
    /// The submitted value of `name`; `Some(None)` is a registered, empty field.
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Owns the value of every registered field.
///
/// Widgets never hold on to a slot; they borrow a [`FieldHandle`] for the
/// duration of one transition via [`FormController::binding`].
#[derive(Clone, Debug, Default)]
pub struct FormController {
    fields: Vec<FieldEntry>,
    by_name: HashMap<String, FieldId>,
    submit_count: u32,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty field.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        rules: FieldRules,
    ) -> Result<FieldId, FormError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(FormError::DuplicateField { name });
        }

        let id = FieldId::from_index(self.fields.len()).ok_or(FormError::TooManyFields)?;
        self.by_name.insert(name.clone(), id);
        self.fields.push(FieldEntry {
            name,
            rules,
            value: None,
        });
        Ok(id)
    }

    pub fn id_of(&self, name: &str) -> Option<FieldId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: FieldId) -> Option<&str> {
        self.fields.get(id.index()).map(|f| f.name.as_str())
    }

    pub fn value(&self, id: FieldId) -> Option<f64> {
        self.fields.get(id.index()).and_then(|f| f.value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the binding of one field.
    pub fn binding(&mut self, id: FieldId) -> FieldHandle<'_> {
        FieldHandle { form: self, id }
    }

    /// Validate every field and collect the values.
    ///
    /// Counts as a submission attempt whether or not it succeeds.
    pub fn handle_submit(&mut self) -> Result<FormData, FormErrors> {
        self.submit_count = self.submit_count.saturating_add(1);

        let mut errors = FormErrors::default();
        for field in &self.fields {
            if field.rules.required && field.value.is_none() {
                errors.push(&field.name, FieldError::Required);
            }
        }

        if !errors.is_empty() {
            log::warn!(target: "form_state", "submission #{} rejected: {errors}", self.submit_count);
            return Err(errors);
        }

        let data = FormData {
            values: self
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.value))
                .collect(),
        };
        log::info!(target: "form_state", "submission #{}: {} field(s)", self.submit_count, data.len());
        Ok(data)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Clear every value back to empty. Registrations are kept.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = None;
        }
    }
}

/// [`FieldBinding`] over one field of a [`FormController`].
pub struct FieldHandle<'a> {
    form: &'a mut FormController,
    id: FieldId,
}

impl FieldBinding for FieldHandle<'_> {
    fn current_value(&self) -> Option<f64> {
        self.form.value(self.id)
    }

    fn notify_change(&mut self, value: Option<f64>) {
        match self.form.fields.get_mut(self.id.index()) {
            Some(field) => {
                log::trace!(target: "form_state", "{} <- {value:?}", field.name);
                field.value = value;
            }
            None => log::warn!(target: "form_state", "change for unregistered field {:?}", self.id),
        }
    }
}
