use std::fmt;

/// Error raised while building a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    DuplicateField { name: String },
    TooManyFields,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::DuplicateField { name } => write!(f, "field {name:?} is already registered"),
            FormError::TooManyFields => f.write_str("too many fields registered"),
        }
    }
}

impl std::error::Error for FormError {}

/// Validation failure of a single field at submit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => f.write_str("a value is required"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Every field error of one rejected submission, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(String, FieldError)>,
}

impl FormErrors {
    pub(crate) fn push(&mut self, name: &str, error: FieldError) {
        self.errors.push((name.to_string(), error));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, name: &str) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| *e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldError)> {
        self.errors.iter().map(|(n, e)| (n.as_str(), *e))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}
