//! Preflight orchestration: run every check in order and collect a report.

use std::process::ExitCode;

use crate::checks::{
    bridge::check_bridge, drivers::check_drivers, libraries::check_libraries,
    runtime::check_runtime, server::check_server, CheckContext, CheckKind, CheckResult,
};
use crate::config::Settings;
use crate::probe::Probe;
use crate::shell::host_description;
use crate::ui::UserInterface;

/// Results of one run, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreflightReport {
    checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check result.
    pub fn record(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    /// All recorded results.
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// The result for `kind`, if that check ran.
    pub fn get(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    /// Whether `kind` ran and failed.
    pub fn failed(&self, kind: CheckKind) -> bool {
        self.get(kind).is_some_and(|c| !c.success)
    }

    /// Logical AND of every recorded check.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.success)
    }

    /// 0 when every check passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

impl From<&PreflightReport> for ExitCode {
    fn from(report: &PreflightReport) -> Self {
        ExitCode::from(report.exit_code())
    }
}

/// Run the checks in fixed order.
///
/// The driver check only runs when the Appium server was found. No checker
/// can abort the run.
pub fn run_preflight(
    probe: &dyn Probe,
    ui: &mut dyn UserInterface,
    settings: &Settings,
) -> PreflightReport {
    let title = ui
        .theme()
        .highlight
        .apply_to("Appium environment check")
        .to_string();
    ui.message("");
    ui.message(&title);
    ui.message(&format!("System: {} ({})", host_description(), settings.platform));
    ui.message(&format!("Python interpreter: {}", settings.python));

    let mut ctx = CheckContext::new(probe, ui, settings);
    let mut report = PreflightReport::new();

    report.record(check_runtime(&mut ctx));

    let server = check_server(&mut ctx);
    let server_ok = server.success;
    report.record(server);

    report.record(check_libraries(&mut ctx));
    report.record(check_bridge(&mut ctx));

    if server_ok {
        report.record(check_drivers(&mut ctx));
    } else {
        tracing::debug!("Skipping driver check: Appium server unavailable");
    }

    for check in report.checks() {
        match serde_json::to_string(&check.details) {
            Ok(json) => tracing::debug!(
                "{}: success={} details={}",
                check.kind,
                check.success,
                json
            ),
            Err(e) => tracing::debug!("{}: details not serializable: {}", check.kind, e),
        }
    }

    report
}
