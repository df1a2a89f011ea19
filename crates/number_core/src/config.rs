//! Field configuration.
//!
//! [`RawFieldConfig`] is what arrives from outside (props, config files); it
//! carries the mode as a string. [`FieldConfig`] is the validated form every
//! other API takes, so an unknown mode can only surface in the conversion.

use crate::mode::{Mode, ModeError};

/// Validated configuration of one number field.
///
/// Two configurations are equal when their modes match and their initial
/// values are the same value: `NaN` equals `NaN`, `0.0` and `-0.0` differ.
#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    pub mode: Mode,
    pub initial_value: Option<f64>,
}

impl PartialEq for FieldConfig {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && match (self.initial_value, other.initial_value) {
                (Some(a), Some(b)) => same_value(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

impl FieldConfig {
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            initial_value: None,
        }
    }

    pub const fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }
}

/// Unvalidated field configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RawFieldConfig {
    pub mode: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub decimal_places: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_value: Option<f64>,
}

impl TryFrom<RawFieldConfig> for FieldConfig {
    type Error = ModeError;

    fn try_from(raw: RawFieldConfig) -> Result<Self, Self::Error> {
        FieldConfig::try_from(&raw)
    }
}

impl TryFrom<&RawFieldConfig> for FieldConfig {
    type Error = ModeError;

    fn try_from(raw: &RawFieldConfig) -> Result<Self, Self::Error> {
        Ok(FieldConfig {
            mode: Mode::from_tag(&raw.mode, raw.decimal_places)?,
            initial_value: raw.initial_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(mode: &str, decimal_places: Option<u32>, initial_value: Option<f64>) -> RawFieldConfig {
        RawFieldConfig {
            mode: mode.to_string(),
            decimal_places,
            initial_value,
        }
    }

    #[test]
    fn converts_known_modes() {
        let cfg = FieldConfig::try_from(raw("whole", None, Some(27.0))).unwrap();
        assert_eq!(cfg, FieldConfig::new(Mode::Whole).with_initial_value(27.0));

        let cfg = FieldConfig::try_from(raw("decimal", Some(3), None)).unwrap();
        assert_eq!(cfg.mode, Mode::Decimal { places: 3 });
        assert_eq!(cfg.initial_value, None);
    }

    #[test]
    fn unknown_mode_fails_conversion() {
        let err = FieldConfig::try_from(raw("percent", None, None)).unwrap_err();
        assert!(matches!(err, ModeError::UnknownMode { ref tag } if tag == "percent"));
    }

    #[test]
    fn invalid_initial_value_is_not_a_config_error() {
        // Discarded later when the field seeds.
        let cfg = FieldConfig::try_from(raw("whole", None, Some(-3.0))).unwrap();
        assert_eq!(cfg.initial_value, Some(-3.0));
    }

    #[test]
    fn equality_treats_initial_values_as_same_value() {
        let nan = FieldConfig::new(Mode::Integer).with_initial_value(f64::NAN);
        assert_eq!(nan, nan);
        assert_eq!(nan, FieldConfig::new(Mode::Integer).with_initial_value(-f64::NAN));

        let zero = FieldConfig::new(Mode::Integer).with_initial_value(0.0);
        assert_ne!(zero, FieldConfig::new(Mode::Integer).with_initial_value(-0.0));
        assert_ne!(zero, FieldConfig::new(Mode::Integer));
        assert_ne!(zero, FieldConfig::new(Mode::Whole).with_initial_value(0.0));
    }
}
