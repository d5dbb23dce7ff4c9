//! The five toolchain checks and their result records.
//!
//! Each checker prints its own section through the [`UserInterface`] and
//! returns a [`CheckResult`]. Checkers never fail: every probe error is turned
//! into printed guidance and a `success` flag.
//!
//! # Modules
//!
//! - [`runtime`] - Node.js and npm
//! - [`server`] - Appium server and appium-doctor
//! - [`libraries`] - Python client libraries
//! - [`bridge`] - ADB, connected devices, Android SDK variables
//! - [`drivers`] - Installed Appium drivers

pub mod bridge;
pub mod drivers;
pub mod libraries;
pub mod runtime;
pub mod server;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Settings;
use crate::probe::Probe;
use crate::ui::UserInterface;

/// Identity of a check, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CheckKind {
    NodeJs,
    AppiumServer,
    PythonPackages,
    Adb,
    AppiumDrivers,
}

impl CheckKind {
    /// Name shown in the summary table.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::NodeJs => "Node.js",
            Self::AppiumServer => "Appium Server",
            Self::PythonPackages => "Python packages",
            Self::Adb => "ADB",
            Self::AppiumDrivers => "Appium drivers",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Node.js runtime findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeDetails {
    pub installed: bool,
    pub version: Option<String>,
    pub npm_version: Option<String>,
}

/// Appium server findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerDetails {
    pub installed: bool,
    pub version: Option<String>,
    pub path: Option<PathBuf>,
    pub doctor_installed: bool,
}

/// Import status of one client library. `version` is `None` when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageStatus {
    pub name: String,
    pub version: Option<String>,
}

impl PackageStatus {
    pub fn is_installed(&self) -> bool {
        self.version.is_some()
    }
}

/// Python client library findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LibraryDetails {
    pub python_version: Option<String>,
    pub packages: Vec<PackageStatus>,
}

/// ADB findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BridgeDetails {
    pub installed: bool,
    pub version: Option<String>,
    pub devices: Vec<String>,
    pub sdk_root: Option<String>,
}

/// Installed driver findings. `None` means the list could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverDetails {
    pub uiautomator2: Option<bool>,
    pub xcuitest: Option<bool>,
}

/// Check-specific details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckDetails {
    Runtime(RuntimeDetails),
    Server(ServerDetails),
    Libraries(LibraryDetails),
    Bridge(BridgeDetails),
    Drivers(DriverDetails),
}

/// Outcome of one checker invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub kind: CheckKind,
    pub success: bool,
    pub details: CheckDetails,
}

impl CheckResult {
    pub fn new(kind: CheckKind, success: bool, details: CheckDetails) -> Self {
        Self {
            kind,
            success,
            details,
        }
    }
}

/// What every checker needs: host access, an output sink, and settings.
pub struct CheckContext<'a> {
    pub probe: &'a dyn Probe,
    pub ui: &'a mut dyn UserInterface,
    pub settings: &'a Settings,
}

impl<'a> CheckContext<'a> {
    pub fn new(
        probe: &'a dyn Probe,
        ui: &'a mut dyn UserInterface,
        settings: &'a Settings,
    ) -> Self {
        Self {
            probe,
            ui,
            settings,
        }
    }

    /// Print each guidance line as info.
    pub(crate) fn guidance(&mut self, lines: &[&str]) {
        for line in lines {
            self.ui.info(line);
        }
    }
}
