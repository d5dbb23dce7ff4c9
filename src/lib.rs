//! appium-preflight - verify the Appium mobile UI-automation toolchain.
//!
//! Runs a fixed sequence of read-only checks (Node.js, the Appium server,
//! Python client libraries, ADB, Appium drivers), prints remediation
//! guidance for anything missing, and reports an overall verdict.
//!
//! # Modules
//!
//! - [`checks`] - The individual toolchain checks and their result records
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Run settings
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Executable lookup, command probing, version extraction
//! - [`runner`] - Check orchestration and the run report
//! - [`shell`] - Bounded-time process execution and platform detection
//! - [`summary`] - Pass/fail table and next steps
//! - [`ui`] - Styled console output
//!
//! # Example
//!
//! ```
//! use appium_preflight::config::Settings;
//! use appium_preflight::probe::MockProbe;
//! use appium_preflight::runner::run_preflight;
//! use appium_preflight::shell::Platform;
//! use appium_preflight::ui::MockUI;
//!
//! let mut probe = MockProbe::new();
//! probe.respond("node --version", "v20.11.1");
//! probe.respond("npm --version", "10.2.4");
//!
//! let mut ui = MockUI::new();
//! let report = run_preflight(&probe, &mut ui, &Settings::for_platform(Platform::Linux));
//!
//! assert!(report.checks()[0].success);
//! assert_eq!(report.exit_code(), 1); // everything else is missing
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod runner;
pub mod shell;
pub mod summary;
pub mod ui;

pub use error::{PreflightError, Result};
