//! Installed Appium driver check.

use crate::probe::check_command;

use super::{CheckContext, CheckDetails, CheckKind, CheckResult, DriverDetails};

/// Android driver; required for Android automation.
pub const ANDROID_DRIVER: &str = "uiautomator2";

/// iOS driver; only needed for iOS automation.
pub const IOS_DRIVER: &str = "xcuitest";

/// List installed drivers and flag the Android and iOS ones.
///
/// Findings are informational, so the check always succeeds.
pub fn check_drivers(ctx: &mut CheckContext<'_>) -> CheckResult {
    ctx.ui.header("Checking Appium drivers");

    let mut details = DriverDetails::default();

    match check_command(
        ctx.probe,
        "appium",
        &["driver", "list", "--installed"],
        "Appium driver list",
        ctx.settings.driver_list_timeout,
    ) {
        Ok(output) => {
            let listing = output.to_lowercase();
            let android = listing.contains(ANDROID_DRIVER);
            let ios = listing.contains(IOS_DRIVER);

            if android {
                ctx.ui.success("UiAutomator2 driver installed (Android)");
            } else {
                ctx.ui
                    .warning("UiAutomator2 driver not installed (required for Android)");
                ctx.ui
                    .info("  Install with: appium driver install uiautomator2");
            }

            if ios {
                ctx.ui.success("XCUITest driver installed (iOS)");
            } else {
                ctx.ui
                    .info("XCUITest driver not installed (only needed for iOS)");
            }

            details.uiautomator2 = Some(android);
            details.xcuitest = Some(ios);
        }
        Err(e) => {
            ctx.ui.warning(&format!("Could not list Appium drivers: {}", e));
            ctx.ui
                .info("Appium 1.x bundles its drivers; this warning can be ignored there");
        }
    }

    CheckResult::new(CheckKind::AppiumDrivers, true, CheckDetails::Drivers(details))
}
