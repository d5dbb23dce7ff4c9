//! CLI argument definitions.
//!
//! The tool takes no arguments for a normal run; the flags below only tune
//! output and the Python interpreter used for the client-library check.

use clap::Parser;

/// Appium preflight - verify the mobile UI-automation toolchain.
#[derive(Debug, Parser)]
#[command(name = "appium-preflight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter used to import the client libraries
    #[arg(long, env = "APPIUM_PREFLIGHT_PYTHON", value_name = "INTERPRETER")]
    pub python: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
