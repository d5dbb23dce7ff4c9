//! Node.js runtime and npm check.

use crate::probe::{check_command, extract_version};
use crate::shell::Platform;

use super::{CheckContext, CheckDetails, CheckKind, CheckResult, RuntimeDetails};

/// Node.js install instructions for a platform.
pub fn install_hints(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Windows => &[
            "Install Node.js:",
            "  - Download the LTS installer from https://nodejs.org/",
            "  - Or: winget install OpenJS.NodeJS.LTS",
        ],
        Platform::MacOS => &[
            "Install Node.js:",
            "  - Download the LTS installer from https://nodejs.org/",
            "  - Or with Homebrew: brew install node",
        ],
        Platform::Linux => &[
            "Install Node.js:",
            "  - Ubuntu/Debian: sudo apt-get install nodejs npm",
            "  - Fedora: sudo dnf install nodejs npm",
            "  - Or download the LTS build from https://nodejs.org/",
        ],
    }
}

/// Check for Node.js, then npm. Only a missing Node.js fails the check.
pub fn check_runtime(ctx: &mut CheckContext<'_>) -> CheckResult {
    ctx.ui.header("Checking Node.js");

    let mut details = RuntimeDetails::default();
    let timeout = ctx.settings.probe_timeout;
    let platform = ctx.settings.platform;

    match check_command(ctx.probe, "node", &["--version"], "Node.js", timeout) {
        Ok(output) => {
            details.installed = true;
            details.version = extract_version(&output);
            ctx.ui.success(&format!("Node.js installed: {}", output));
        }
        Err(e) => {
            ctx.ui.error(&format!("Node.js is not available: {}", e));
            ctx.guidance(install_hints(platform));
            return CheckResult::new(CheckKind::NodeJs, false, CheckDetails::Runtime(details));
        }
    }

    match check_command(ctx.probe, "npm", &["--version"], "npm", timeout) {
        Ok(output) => {
            details.npm_version = extract_version(&output);
            ctx.ui.success(&format!("npm installed: {}", output));
        }
        Err(e) => ctx.ui.warning(&format!("npm not found: {}", e)),
    }

    CheckResult::new(CheckKind::NodeJs, true, CheckDetails::Runtime(details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::probe::MockProbe;
    use crate::ui::MockUI;

    fn run(probe: &MockProbe, platform: Platform) -> (CheckResult, MockUI) {
        let settings = Settings::for_platform(platform);
        let mut ui = MockUI::new();
        let result = {
            let mut ctx = CheckContext::new(probe, &mut ui, &settings);
            check_runtime(&mut ctx)
        };
        (result, ui)
    }

    fn runtime(result: &CheckResult) -> &RuntimeDetails {
        match &result.details {
            CheckDetails::Runtime(d) => d,
            other => panic!("Expected runtime details, got {:?}", other),
        }
    }

    #[test]
    fn node_and_npm_present() {
        let mut probe = MockProbe::new();
        probe.respond("node --version", "v20.11.1");
        probe.respond("npm --version", "10.2.4");

        let (result, ui) = run(&probe, Platform::Linux);

        assert!(result.success);
        assert_eq!(
            runtime(&result),
            &RuntimeDetails {
                installed: true,
                version: Some("20.11.1".into()),
                npm_version: Some("10.2.4".into()),
            }
        );
        assert!(ui.successes()[0].contains("v20.11.1"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_node_fails_without_version_and_skips_npm() {
        let mut probe = MockProbe::new();
        probe.respond("npm --version", "10.2.4");

        let (result, ui) = run(&probe, Platform::Linux);

        assert!(!result.success);
        assert!(runtime(&result).version.is_none());
        assert!(!runtime(&result).installed);
        assert!(!probe.was_called("npm --version"));
        assert!(ui.errors()[0].contains("Node.js"));
        assert!(ui.contains("sudo apt-get install nodejs npm"));
    }

    #[test]
    fn missing_npm_is_only_a_warning() {
        let mut probe = MockProbe::new();
        probe.respond("node --version", "v18.19.0");

        let (result, ui) = run(&probe, Platform::MacOS);

        assert!(result.success);
        assert!(runtime(&result).npm_version.is_none());
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.warnings()[0].contains("npm"));
    }

    #[test]
    fn failing_node_uses_platform_guidance() {
        let mut probe = MockProbe::new();
        probe.respond_failure("node --version", 1);

        let (result, ui) = run(&probe, Platform::Windows);

        assert!(!result.success);
        assert!(ui.errors()[0].contains("exit code: 1"));
        assert!(ui.contains("winget install OpenJS.NodeJS.LTS"));
        assert!(!ui.contains("apt-get"));
    }

    #[test]
    fn every_platform_has_guidance() {
        for platform in [Platform::Windows, Platform::MacOS, Platform::Linux] {
            assert!(install_hints(platform)
                .iter()
                .any(|line| line.contains("nodejs.org")));
        }
    }
}
