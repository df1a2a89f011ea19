mod app;
mod error;
mod spec;

pub use app::{FormDemoApp, Status};
pub use error::DemoError;
pub use spec::{FieldSpec, FormSpec};
