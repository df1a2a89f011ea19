//! # number_core
//!
//! UI-agnostic numeric entry layer for the numfield widgets.
//!
//! This crate provides the building blocks for a constrained number field:
//! - [`Mode`]: the entry discipline (integer, whole, decimal with places)
//! - [`normalize`]: keystroke-level sanitization of raw text into a [`NormalizedValue`]
//! - [`is_valid_initial_value`]: validation of externally supplied seed values
//! - [`NumberField`]: the field controller that keeps a [`FieldBinding`] in sync
//!
//! ## Design Principles
//!
//! Nothing here renders or owns an event loop. Every operation is a total,
//! synchronous function of its latest input:
//! - [`reseed`] builds the state for a configuration
//! - [`on_edit`] folds one raw edit into a state
//!
//! [`NumberField`] wraps those two transitions and performs the single side
//! effect a host cares about: notifying the bound form value.
//!
//! ## Integration
//!
//! ```
//! use number_core::{FieldConfig, Mode, NumberField};
//!
//! let mut bound: Option<f64> = None;
//! let config = FieldConfig::new(Mode::Whole).with_initial_value(27.0);
//!
//! let mut field = NumberField::mount(config, &mut bound);
//! assert_eq!(field.display(), "27");
//!
//! field.edit("3.9", &mut bound);
//! assert_eq!(field.display(), "39");
//! assert_eq!(bound, Some(39.0));
//! ```

mod binding;
mod config;
mod field;
mod initial;
mod mode;
mod normalize;
mod parse;

pub use binding::FieldBinding;
pub use config::{FieldConfig, RawFieldConfig};
pub use field::{FieldPhase, FieldState, NumberField, on_edit, reseed};
pub use initial::{is_valid_initial_value, seed_text};
pub use mode::{DEFAULT_DECIMAL_PLACES, Mode, ModeError};
pub use normalize::{NormalizedValue, normalize};
pub use parse::parse_leading_float;
