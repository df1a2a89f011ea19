//! Declarative description of the demo form.
//!
//! ```toml
//! title = "Order"
//!
//! [[fields]]
//! name = "quantity"
//! label = "Quantity"
//! required = true
//! mode = "whole"
//! initial_value = 27
//!
//! [[fields]]
//! name = "price"
//! mode = "decimal"
//! decimal_places = 2
//! ```

use crate::error::DemoError;
use number_core::RawFieldConfig;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "numfield";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FormSpec {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Shown above the input; falls back to `name`.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub config: RawFieldConfig,
}

impl FieldSpec {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// A single whole-number field seeded with 27.
impl Default for FormSpec {
    fn default() -> Self {
        Self {
            title: default_title(),
            fields: vec![FieldSpec {
                name: "numberInput".to_string(),
                label: None,
                required: false,
                config: RawFieldConfig {
                    mode: "whole".to_string(),
                    decimal_places: None,
                    initial_value: Some(27.0),
                },
            }],
        }
    }
}

impl FormSpec {
    pub fn from_toml_str(s: &str) -> Result<Self, DemoError> {
        Self::parse(s, "<inline>")
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(s: &str, origin: &str) -> Result<Self, DemoError> {
        let spec: FormSpec = toml::from_str(s).map_err(|source| DemoError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        log::debug!(target: "demo", "loaded form {origin}: {} field(s)", spec.fields.len());
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mirrors_single_whole_field() {
        let spec = FormSpec::default();
        assert_eq!(spec.fields.len(), 1);
        let field = &spec.fields[0];
        assert_eq!(field.label(), "numberInput");
        assert_eq!(field.config.mode, "whole");
        assert_eq!(field.config.initial_value, Some(27.0));
    }

    #[test]
    fn parses_flattened_field_config() {
        let spec = FormSpec::from_toml_str(
            r#"
            title = "Order"

            [[fields]]
            name = "quantity"
            label = "Quantity"
            required = true
            mode = "whole"
            initial_value = 27

            [[fields]]
            name = "price"
            mode = "decimal"
            decimal_places = 3
            initial_value = 1.5
            "#,
        )
        .unwrap();

        assert_eq!(spec.title, "Order");
        assert_eq!(spec.fields[0].label(), "Quantity");
        assert!(spec.fields[0].required);
        assert_eq!(spec.fields[0].config.initial_value, Some(27.0));
        assert_eq!(spec.fields[1].config.decimal_places, Some(3));
        assert_eq!(spec.fields[1].config.initial_value, Some(1.5));
        assert!(!spec.fields[1].required);
    }

    #[test]
    fn missing_title_uses_default() {
        let spec = FormSpec::from_toml_str("").unwrap();
        assert_eq!(spec.title, DEFAULT_TITLE);
        assert!(spec.fields.is_empty());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = FormSpec::from_toml_str("[[fields]]\nname = ").unwrap_err();
        assert!(matches!(err, DemoError::Parse { .. }));
    }
}
