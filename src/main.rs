//! modkit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use modkit::cli::{working_dir, Cli, CommandDispatcher};
use modkit::environment::{InteractivityDetector, ProcessEnv};
use modkit::ui::{create_ui, should_use_colors, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("modkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modkit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("modkit starting with args: {:?}", cli);

    let env = ProcessEnv;
    let use_colors = !cli.no_color && should_use_colors(&env);

    let interactivity = InteractivityDetector::from_process(&env);
    tracing::debug!("Interactivity: {:?}", interactivity);

    let mut ui = create_ui(
        interactivity.is_interactive(),
        OutputMode::from_quiet(cli.quiet),
        use_colors,
    );

    let result = working_dir(cli.directory.as_deref()).and_then(|cwd| {
        let dispatcher = CommandDispatcher::new(cwd, &env, interactivity);
        dispatcher.dispatch(&cli, ui.as_mut())
    });

    match result {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
