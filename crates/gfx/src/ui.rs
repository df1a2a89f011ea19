mod form_actions;
mod number_input;

pub use form_actions::{FormActionsConfig, FormIntent, form_actions, form_actions_with_config};
pub use number_input::{NumberInputConfig, number_input, number_input_with_config};
