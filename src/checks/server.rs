//! Appium server check.

use crate::probe::{check_command, extract_version};

use super::{CheckContext, CheckDetails, CheckKind, CheckResult, ServerDetails};

const INSTALL_HINTS: &[&str] = &[
    "Install the Appium server:",
    "  npm install -g appium",
    "Installing appium-doctor alongside it is recommended:",
    "  npm install -g appium-doctor",
];

/// Check for the Appium server, then the optional appium-doctor.
pub fn check_server(ctx: &mut CheckContext<'_>) -> CheckResult {
    ctx.ui.header("Checking Appium Server");

    let mut details = ServerDetails::default();
    let timeout = ctx.settings.probe_timeout;

    match check_command(ctx.probe, "appium", &["-v"], "Appium Server", timeout) {
        Ok(output) => {
            details.installed = true;
            details.version = extract_version(&output);
            details.path = ctx.probe.locate("appium");
            ctx.ui
                .success(&format!("Appium Server installed: {}", output));
            if let Some(path) = &details.path {
                ctx.ui.info(&format!("Location: {}", path.display()));
            }
        }
        Err(e) => {
            ctx.ui
                .error(&format!("Appium Server is not available: {}", e));
            ctx.guidance(INSTALL_HINTS);
            return CheckResult::new(
                CheckKind::AppiumServer,
                false,
                CheckDetails::Server(details),
            );
        }
    }

    match check_command(
        ctx.probe,
        "appium-doctor",
        &["--version"],
        "Appium Doctor",
        timeout,
    ) {
        Ok(output) => {
            details.doctor_installed = true;
            let first_line = output.lines().next().unwrap_or("detected");
            ctx.ui
                .success(&format!("Appium Doctor installed: {}", first_line));
        }
        Err(e) => {
            tracing::debug!("appium-doctor probe: {}", e);
            ctx.ui.warning("Appium Doctor not installed (optional)");
            ctx.ui.info("  Install with: npm install -g appium-doctor");
        }
    }

    CheckResult::new(CheckKind::AppiumServer, true, CheckDetails::Server(details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::probe::MockProbe;
    use crate::shell::Platform;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn run(probe: &MockProbe) -> (CheckResult, MockUI) {
        let settings = Settings::for_platform(Platform::Linux);
        let mut ui = MockUI::new();
        let result = {
            let mut ctx = CheckContext::new(probe, &mut ui, &settings);
            check_server(&mut ctx)
        };
        (result, ui)
    }

    fn server(result: &CheckResult) -> &ServerDetails {
        match &result.details {
            CheckDetails::Server(d) => d,
            other => panic!("Expected server details, got {:?}", other),
        }
    }

    #[test]
    fn server_and_doctor_present() {
        let mut probe = MockProbe::new();
        probe.respond("appium -v", "2.5.1");
        probe.respond("appium-doctor --version", "1.16.2\nextra line");

        let (result, ui) = run(&probe);

        assert!(result.success);
        let details = server(&result);
        assert!(details.installed);
        assert_eq!(details.version.as_deref(), Some("2.5.1"));
        assert_eq!(details.path, Some(PathBuf::from("/mock/bin/appium")));
        assert!(details.doctor_installed);
        assert!(ui.contains("Location: /mock/bin/appium"));
        assert!(ui.successes()[1].ends_with("1.16.2"));
    }

    #[test]
    fn missing_server_fails_with_install_guidance() {
        let probe = MockProbe::new();

        let (result, ui) = run(&probe);

        assert!(!result.success);
        let details = server(&result);
        assert!(!details.installed);
        assert!(details.version.is_none());
        assert!(details.path.is_none());
        assert!(ui.contains("npm install -g appium"));
        assert!(!probe.was_called("appium-doctor --version"));
    }

    #[test]
    fn missing_doctor_is_only_a_warning() {
        let mut probe = MockProbe::new();
        probe.respond("appium -v", "2.5.1");

        let (result, ui) = run(&probe);

        assert!(result.success);
        assert!(!server(&result).doctor_installed);
        assert_eq!(ui.warnings(), ["Appium Doctor not installed (optional)"]);
    }

    #[test]
    fn timed_out_server_fails() {
        let mut probe = MockProbe::new();
        probe.respond_timeout("appium -v");

        let (result, ui) = run(&probe);

        assert!(!result.success);
        assert!(ui.errors()[0].contains("timed out"));
    }
}
