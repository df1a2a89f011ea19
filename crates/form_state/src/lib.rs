//! # form_state
//!
//! The form side of a number field: named value slots, per-field
//! [`FieldBinding`](number_core::FieldBinding) handles, and submission.
//!
//! ```
//! use form_state::{FieldRules, FormController};
//! use number_core::{FieldConfig, Mode, NumberField};
//!
//! let mut form = FormController::new();
//! let id = form.register("numberInput", FieldRules::default()).unwrap();
//!
//! let config = FieldConfig::new(Mode::Whole).with_initial_value(27.0);
//! let mut field = NumberField::mount(config, &mut form.binding(id));
//! field.edit("3.9", &mut form.binding(id));
//!
//! let data = form.handle_submit().unwrap();
//! assert_eq!(data.get("numberInput"), Some(Some(39.0)));
//! ```

mod controller;
mod error;
mod id;

pub use controller::{FieldHandle, FieldRules, FormController, FormData};
pub use error::{FieldError, FormError, FormErrors};
pub use id::FieldId;
