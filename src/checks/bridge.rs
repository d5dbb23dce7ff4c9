//! Android Debug Bridge, connected devices, and SDK environment check.

use crate::probe::check_command;
use crate::shell::Platform;

use super::{BridgeDetails, CheckContext, CheckDetails, CheckKind, CheckResult};

/// Environment variables that may point at the Android SDK, in lookup order.
pub const SDK_ROOT_VARS: [&str; 2] = ["ANDROID_HOME", "ANDROID_SDK_ROOT"];

/// Multi-step ADB install instructions for a platform.
pub fn install_hints(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Windows => &[
            "Install ADB:",
            "  1. Download Android Platform Tools:",
            "     https://developer.android.com/tools/releases/platform-tools",
            "  2. Extract it somewhere stable (e.g. C:\\Android\\platform-tools)",
            "  3. Add that folder to the PATH system environment variable",
            "  4. Open a new terminal",
        ],
        Platform::MacOS => &[
            "Install ADB:",
            "  1. brew install --cask android-platform-tools",
            "     (or download https://developer.android.com/tools/releases/platform-tools)",
            "  2. If downloaded manually, add platform-tools to PATH in ~/.zshrc",
            "  3. Open a new terminal",
        ],
        Platform::Linux => &[
            "Install ADB:",
            "  1. Ubuntu/Debian: sudo apt-get install android-tools-adb",
            "     Fedora: sudo dnf install android-tools",
            "     (or download https://developer.android.com/tools/releases/platform-tools)",
            "  2. If downloaded manually, add platform-tools to PATH in your shell profile",
            "  3. Open a new terminal",
        ],
    }
}

/// Suggested commands for setting the SDK variables on a platform.
pub fn sdk_env_hints(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Windows => &[
            "  setx ANDROID_HOME \"C:\\Android\"",
            "  setx ANDROID_SDK_ROOT \"C:\\Android\"",
        ],
        Platform::MacOS | Platform::Linux => &[
            "  export ANDROID_HOME=/path/to/android/sdk",
            "  export ANDROID_SDK_ROOT=/path/to/android/sdk",
        ],
    }
}

/// Devices from `adb devices -l` output.
///
/// The first line is the "List of devices attached" banner and is always
/// skipped. Every other non-blank line containing "device" (any case) is
/// kept verbatim, trimmed. This is a literal substring match: a line such as
/// `offline-device unauthorized` is kept because of its serial.
pub fn parse_device_list(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.to_lowercase().contains("device"))
        .map(str::to_string)
        .collect()
}

/// First line mentioning "version" (any case), trimmed.
fn version_line(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.to_lowercase().contains("version"))
        .map(|line| line.trim().to_string())
}

/// Check for ADB, then list devices and look for the SDK variables.
///
/// Only a missing ADB fails the check; device and environment findings
/// are advisory.
pub fn check_bridge(ctx: &mut CheckContext<'_>) -> CheckResult {
    ctx.ui.header("Checking ADB and Android SDK");

    let mut details = BridgeDetails::default();
    let timeout = ctx.settings.probe_timeout;
    let platform = ctx.settings.platform;

    match check_command(ctx.probe, "adb", &["version"], "ADB", timeout) {
        Ok(output) => {
            details.installed = true;
            details.version = version_line(&output);
            let shown = details
                .version
                .clone()
                .or_else(|| output.lines().next().map(str::to_string))
                .unwrap_or_default();
            ctx.ui.success(&format!("ADB installed: {}", shown));
        }
        Err(e) => {
            ctx.ui.error(&format!("ADB is not available: {}", e));
            ctx.guidance(install_hints(platform));
            return CheckResult::new(CheckKind::Adb, false, CheckDetails::Bridge(details));
        }
    }

    match check_command(ctx.probe, "adb", &["devices", "-l"], "ADB", timeout) {
        Ok(output) => {
            details.devices = parse_device_list(&output);
            if details.devices.is_empty() {
                ctx.ui.warning("No connected Android devices detected");
                ctx.guidance(&[
                    "Make sure that:",
                    "  1. The device is connected over USB",
                    "  2. Developer options and USB debugging are enabled",
                    "  3. The USB debugging prompt was accepted on the device",
                    "  4. `adb devices` lists the device",
                ]);
            } else {
                ctx.ui
                    .success(&format!("Detected {} device(s):", details.devices.len()));
                for device in &details.devices {
                    ctx.ui.info(&format!("  - {}", device));
                }
            }
        }
        Err(e) => ctx.ui.warning(&format!("Could not list devices: {}", e)),
    }

    details.sdk_root = SDK_ROOT_VARS
        .iter()
        .find_map(|name| ctx.probe.env_var(name));

    match &details.sdk_root {
        Some(root) => ctx
            .ui
            .success(&format!("Android SDK environment variable set: {}", root)),
        None => {
            ctx.ui
                .warning("Neither ANDROID_HOME nor ANDROID_SDK_ROOT is set");
            ctx.ui.info("Setting them is recommended:");
            ctx.guidance(sdk_env_hints(platform));
        }
    }

    CheckResult::new(CheckKind::Adb, true, CheckDetails::Bridge(details))
}
