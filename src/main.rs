//! Builds the root layout context and writes it to stdout as JSON.
//!
//! Usage: `locale-overrides [--root DIR] [--cookie HEADER]`

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use locale_overrides::LayoutContext;
use locale_overrides::config::ConfigManager;
use tracing_subscriber::EnvFilter;

/// Command-line options.
#[derive(Debug)]
struct Args {
    /// Workspace root. Defaults to the current directory.
    root: Option<PathBuf>,
    /// Raw `Cookie` header used to pick the initial language.
    cookie: Option<String>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        root: args.opt_value_from_str("--root")?,
        cookie: args.opt_value_from_str("--cookie")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!("Ignoring unexpected arguments: {:?}", rest);
    }
    Ok(parsed)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(workspace_root))?;

    let context = LayoutContext::from_config(&config_manager, args.cookie.as_deref())?;
    tracing::info!(
        initial_language = %context.initial_language,
        locales = context.i18n_overrides.len(),
        "Prepared layout context"
    );

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &context)?;
    writeln!(stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args().map_err(Into::into).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
