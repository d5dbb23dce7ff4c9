//! appium-preflight CLI entry point.

use std::process::ExitCode;

use appium_preflight::cli::Cli;
use appium_preflight::config::Settings;
use appium_preflight::probe::SystemProbe;
use appium_preflight::runner::run_preflight;
use appium_preflight::summary::print_summary;
use appium_preflight::ui::TerminalUI;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so the report on stdout stays readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("appium_preflight=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("appium_preflight=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("appium-preflight starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let settings = Settings::from_cli(&cli);
    let probe = SystemProbe;
    let mut ui = TerminalUI::new();

    let report = run_preflight(&probe, &mut ui, &settings);
    print_summary(&report, &mut ui);

    ExitCode::from(&report)
}
