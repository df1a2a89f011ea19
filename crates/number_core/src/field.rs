//! Field state and the controller that drives a [`FieldBinding`].
//!
//! The state of a number field moves through two phases:
//! - `Seeded`: built from a [`FieldConfig`] by [`reseed`]
//! - `Edited`: the result of the latest raw edit, built by [`on_edit`]
//!
//! Both transitions are pure. [`NumberField`] applies them and notifies the
//! binding once per transition.

use crate::binding::FieldBinding;
use crate::config::FieldConfig;
use crate::initial::{is_valid_initial_value, seed_text};
use crate::mode::Mode;
use crate::normalize::{NormalizedValue, normalize};

/// Where a field's current value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
    Seeded,
    Edited,
}

/// Snapshot of one number field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    config: FieldConfig,
    value: NormalizedValue,
    phase: FieldPhase,
}

impl FieldState {
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn value(&self) -> &NormalizedValue {
        &self.value
    }

    pub fn phase(&self) -> FieldPhase {
        self.phase
    }
}

/// Build the seeded state for `config`.
///
/// A valid initial value seeds both the display text and the numeric value;
/// an invalid one is discarded and the field starts empty.
pub fn reseed(config: FieldConfig) -> FieldState {
    let value = match config.initial_value {
        Some(initial) if is_valid_initial_value(initial, config.mode) => NormalizedValue {
            display: seed_text(initial),
            numeric: Some(initial),
        },
        Some(initial) => {
            log::debug!(
                target: "number_core.field",
                "discarding initial value {initial} for {} mode",
                config.mode
            );
            NormalizedValue::empty()
        }
        None => NormalizedValue::empty(),
    };

    FieldState {
        config,
        value,
        phase: FieldPhase::Seeded,
    }
}

/// Fold one raw edit into `state`.
pub fn on_edit(state: &FieldState, raw: &str) -> FieldState {
    FieldState {
        config: state.config,
        value: normalize(raw, state.config.mode),
        phase: FieldPhase::Edited,
    }
}

/// Controller for a single mounted number field.
///
/// # Example
///
/// ```
/// use number_core::{FieldConfig, FieldPhase, Mode, NumberField};
///
/// let mut bound: Option<f64> = Some(1.0);
/// let mut field = NumberField::mount(FieldConfig::new(Mode::decimal()), &mut bound);
/// assert_eq!(bound, None);
///
/// field.edit(".5", &mut bound);
/// assert_eq!(field.display(), "0.5");
/// assert_eq!(field.phase(), FieldPhase::Edited);
/// assert_eq!(bound, Some(0.5));
/// ```
#[derive(Clone, Debug)]
pub struct NumberField {
    state: FieldState,
}

impl NumberField {
    /// Seed a new field from `config` and report its value.
    pub fn mount<B: FieldBinding + ?Sized>(config: FieldConfig, binding: &mut B) -> Self {
        let field = Self {
            state: reseed(config),
        };
        field.notify(binding);
        field
    }

    /// Apply a configuration change.
    ///
    /// Returns `true` if the configuration differed and the field was
    /// reseeded; an identical configuration leaves the field (and the
    /// binding) untouched.
    pub fn reconfigure<B: FieldBinding + ?Sized>(
        &mut self,
        config: FieldConfig,
        binding: &mut B,
    ) -> bool {
        if config == self.state.config {
            return false;
        }
        log::debug!(
            target: "number_core.field",
            "reseeding {} field (initial {:?})",
            config.mode,
            config.initial_value
        );
        self.state = reseed(config);
        self.notify(binding);
        true
    }

    /// Apply one raw edit from the host's text field.
    pub fn edit<B: FieldBinding + ?Sized>(&mut self, raw: &str, binding: &mut B) {
        self.state = on_edit(&self.state, raw);
        self.notify(binding);
    }

    pub fn display(&self) -> &str {
        &self.state.value.display
    }

    pub fn numeric(&self) -> Option<f64> {
        self.state.value.numeric
    }

    pub fn phase(&self) -> FieldPhase {
        self.state.phase
    }

    pub fn mode(&self) -> Mode {
        self.state.config.mode
    }

    pub fn config(&self) -> &FieldConfig {
        &self.state.config
    }

    pub fn placeholder(&self) -> String {
        self.state.config.mode.placeholder()
    }

    fn notify<B: FieldBinding + ?Sized>(&self, binding: &mut B) {
        binding.notify_change(self.state.value.numeric);
    }
}
