//! End-of-run summary: pass/fail table, verdict, and next steps.

use crate::checks::{CheckDetails, CheckKind};
use crate::runner::PreflightReport;
use crate::ui::{StatusKind, Table, UserInterface};

/// Remediation shown for a failed check, in priority order.
const REMEDIATIONS: &[(CheckKind, &str)] = &[
    (CheckKind::NodeJs, "1. Install Node.js and npm"),
    (
        CheckKind::AppiumServer,
        "2. Install the Appium server: npm install -g appium",
    ),
    (
        CheckKind::PythonPackages,
        "3. Install the Python dependencies: pip install -r requirements.txt",
    ),
    (
        CheckKind::Adb,
        "4. Install Android Platform Tools and add them to PATH",
    ),
];

const DRIVER_REMEDIATION: &str =
    "5. Install the UiAutomator2 driver: appium driver install uiautomator2";

const READY_POINTERS: &[&str] = &[
    "Configuration templates:",
    "  - damai_appium/config.example.json",
    "  - config/appium_config.example.json (if present)",
    "Start the Appium server:",
    "  appium --address 127.0.0.1 --port 4723",
    "Start the GUI:",
    "  python start_gui.pyw",
];

/// Whether the driver check ran without confirming UiAutomator2.
fn android_driver_missing(report: &PreflightReport) -> bool {
    match report.get(CheckKind::AppiumDrivers).map(|c| &c.details) {
        Some(CheckDetails::Drivers(drivers)) => drivers.uiautomator2 != Some(true),
        _ => false,
    }
}

/// Next steps for everything that failed, in fixed priority order.
pub fn remediation_steps(report: &PreflightReport) -> Vec<&'static str> {
    let mut steps: Vec<&'static str> = REMEDIATIONS
        .iter()
        .filter(|(kind, _)| report.failed(*kind))
        .map(|(_, step)| *step)
        .collect();

    if android_driver_missing(report) {
        steps.push(DRIVER_REMEDIATION);
    }

    steps
}

/// Print the summary for a finished run.
pub fn print_summary(report: &PreflightReport, ui: &mut dyn UserInterface) {
    ui.header("Summary");

    let mut table = Table::new(vec!["Check", "Result"]);
    for check in report.checks() {
        let status = StatusKind::from_success(check.success).styled(ui.theme());
        table.add_row(vec![check.kind.display_name().to_string(), status]);
    }
    if !table.is_empty() {
        ui.table(&table);
        ui.message("");
    }

    if report.all_passed() {
        ui.success("All checks passed. You can start automating with Appium.");
    } else {
        ui.error("Some checks failed. Follow the guidance above to install and configure them.");
    }

    let steps = remediation_steps(report);
    if !steps.is_empty() {
        ui.message("");
        ui.message("Next steps:");
        for step in steps {
            ui.info(step);
        }
    }

    if report.all_passed() {
        ui.message("");
        for line in READY_POINTERS {
            ui.info(line);
        }
    }
}
