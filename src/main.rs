use demo::{DemoError, FormDemoApp, FormSpec};
use mimalloc::MiMalloc;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const FORM_ENV: &str = "NUMFIELD_FORM";
const DEFAULT_FILTER: &str = "numfield=info,demo=info,form_state=info,warn";

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // `log` records from the library crates are bridged by the fmt subscriber.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

/// First CLI argument, then `NUMFIELD_FORM`, then the built-in form.
fn form_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(FORM_ENV).map(PathBuf::from))
}

fn build_app() -> Result<FormDemoApp, DemoError> {
    let spec = match form_path() {
        Some(path) => {
            log::info!("loading form from {}", path.display());
            FormSpec::load(&path)?
        }
        None => FormSpec::default(),
    };
    FormDemoApp::from_spec(spec)
}

fn main() -> ExitCode {
    init_logging();

    let app = match build_app() {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = platform::run(app) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
