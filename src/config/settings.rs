//! Run settings.

use std::time::Duration;

use crate::cli::Cli;
use crate::shell::Platform;

/// Timeout for `--version`-style probes.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for `appium driver list`, which loads every installed driver.
pub const DRIVER_LIST_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything a run needs to know beyond the probe and the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Python interpreter used for client-library imports.
    pub python: String,
    /// Platform used to select install guidance.
    pub platform: Platform,
    /// Timeout for version probes.
    pub probe_timeout: Duration,
    /// Timeout for the driver listing.
    pub driver_list_timeout: Duration,
}

impl Settings {
    /// Default settings for the given platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            python: platform.default_python().to_string(),
            platform,
            probe_timeout: PROBE_TIMEOUT,
            driver_list_timeout: DRIVER_LIST_TIMEOUT,
        }
    }

    /// Settings for the current host, with CLI overrides applied.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut settings = Self::default();
        if let Some(python) = cli.python.as_deref().filter(|p| !p.trim().is_empty()) {
            settings.python = python.trim().to_string();
        }
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}
