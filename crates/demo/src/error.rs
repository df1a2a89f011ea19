use form_state::FormError;
use number_core::ModeError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum DemoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        origin: String,
        source: toml::de::Error,
    },
    Config {
        field: String,
        source: ModeError,
    },
    Form(FormError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Io { path, source } => {
                write!(f, "cannot read form {}: {source}", path.display())
            }
            DemoError::Parse { origin, source } => write!(f, "invalid form {origin}: {source}"),
            DemoError::Config { field, source } => write!(f, "field {field:?}: {source}"),
            DemoError::Form(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Io { source, .. } => Some(source),
            DemoError::Parse { source, .. } => Some(source),
            DemoError::Config { source, .. } => Some(source),
            DemoError::Form(e) => Some(e),
        }
    }
}

impl From<FormError> for DemoError {
    fn from(e: FormError) -> Self {
        DemoError::Form(e)
    }
}
