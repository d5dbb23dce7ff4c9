//! Python client library check.
//!
//! Libraries are resolved by asking the configured interpreter to import
//! them, so the answer matches what the test code itself will see.

use crate::probe::check_command;

use super::{CheckContext, CheckDetails, CheckKind, CheckResult, LibraryDetails, PackageStatus};

/// Version reported when a module imports but exposes no `__version__`.
pub const UNKNOWN_VERSION: &str = "unknown version";

/// A required client library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredPackage {
    /// Distribution name as shown to users.
    pub name: &'static str,
    /// Top-level module to import.
    pub module: &'static str,
    /// pip requirement specifier.
    pub requirement: &'static str,
}

/// Libraries the automation test code depends on.
pub const REQUIRED_PACKAGES: &[RequiredPackage] = &[
    RequiredPackage {
        name: "Appium-Python-Client",
        module: "appium",
        requirement: "Appium-Python-Client>=3.1.0",
    },
    RequiredPackage {
        name: "selenium",
        module: "selenium",
        requirement: "selenium>=4.18.0",
    },
    RequiredPackage {
        name: "pydantic",
        module: "pydantic",
        requirement: "pydantic>=2.6.0",
    },
];

/// Marker preceding the version in an import probe's output.
const VERSION_MARKER: &str = "version:";

/// Python snippet that imports `module` and prints its marked version.
pub fn import_script(module: &str) -> String {
    format!(
        "import {m}; print('{marker}' + str(getattr({m}, '__version__', '')))",
        m = module,
        marker = VERSION_MARKER
    )
}

/// Version from an import probe's output. Interpreter warnings on stderr
/// share the output, so only the marked line counts.
fn reported_version(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix(VERSION_MARKER))
        .map(str::trim)
        .filter(|version| !version.is_empty())
        .unwrap_or(UNKNOWN_VERSION)
        .to_string()
}

/// Check that every required client library imports.
pub fn check_libraries(ctx: &mut CheckContext<'_>) -> CheckResult {
    ctx.ui.header("Checking Python packages");

    let python = ctx.settings.python.clone();
    let timeout = ctx.settings.probe_timeout;
    let mut details = LibraryDetails::default();

    let interpreter = check_command(ctx.probe, &python, &["--version"], "Python", timeout);
    match &interpreter {
        Ok(output) => {
            details.python_version = Some(
                output
                    .strip_prefix("Python ")
                    .unwrap_or(output)
                    .trim()
                    .to_string(),
            );
            ctx.ui.success(&format!("Python interpreter: {}", output));
        }
        Err(e) => {
            ctx.ui.error(&format!("Python interpreter unavailable: {}", e));
            ctx.ui
                .info("  Install Python 3 or pass --python <INTERPRETER>");
        }
    }

    for package in REQUIRED_PACKAGES {
        let version = if interpreter.is_ok() {
            let script = import_script(package.module);
            match check_command(ctx.probe, &python, &["-c", script.as_str()], package.name, timeout) {
                Ok(output) => Some(reported_version(&output)),
                Err(e) => {
                    tracing::debug!("import {} failed: {}", package.module, e);
                    None
                }
            }
        } else {
            None
        };

        match &version {
            Some(v) => ctx.ui.success(&format!("{} installed: {}", package.name, v)),
            None => ctx.ui.error(&format!("{} not installed", package.name)),
        }

        details.packages.push(PackageStatus {
            name: package.name.to_string(),
            version,
        });
    }

    let all_installed = details.packages.iter().all(PackageStatus::is_installed);

    if !all_installed {
        ctx.ui.message("");
        ctx.ui.info("Install the missing packages:");
        ctx.ui.info("  pip install -r requirements.txt");
        ctx.ui.info("Or individually:");
        for package in REQUIRED_PACKAGES {
            ctx.ui
                .info(&format!("  pip install \"{}\"", package.requirement));
        }
    }

    CheckResult::new(
        CheckKind::PythonPackages,
        all_installed,
        CheckDetails::Libraries(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::probe::MockProbe;
    use crate::shell::Platform;
    use crate::ui::MockUI;

    fn import_line(module: &str) -> String {
        format!("python3 -c {}", import_script(module))
    }

    fn run(probe: &MockProbe) -> (CheckResult, MockUI) {
        let settings = Settings::for_platform(Platform::Linux);
        let mut ui = MockUI::new();
        let result = {
            let mut ctx = CheckContext::new(probe, &mut ui, &settings);
            check_libraries(&mut ctx)
        };
        (result, ui)
    }

    fn libraries(result: &CheckResult) -> &LibraryDetails {
        match &result.details {
            CheckDetails::Libraries(d) => d,
            other => panic!("Expected library details, got {:?}", other),
        }
    }

    #[test]
    fn import_script_reads_dunder_version() {
        assert_eq!(
            import_script("selenium"),
            "import selenium; print('version:' + str(getattr(selenium, '__version__', '')))"
        );
    }

    #[test]
    fn reported_version_falls_back_to_unknown() {
        assert_eq!(reported_version("version:"), UNKNOWN_VERSION);
        assert_eq!(reported_version(""), UNKNOWN_VERSION);
        assert_eq!(
            reported_version("version:4.18.1\nDeprecationWarning: old API"),
            "4.18.1"
        );
    }

    #[test]
    fn all_packages_present() {
        let mut probe = MockProbe::new();
        probe.respond("python3 --version", "Python 3.11.4");
        probe.respond(&import_line("appium"), "version:");
        probe.respond(&import_line("selenium"), "version:4.18.1");
        probe.respond(&import_line("pydantic"), "version:2.6.4");

        let (result, ui) = run(&probe);

        assert!(result.success);
        let details = libraries(&result);
        assert_eq!(details.python_version.as_deref(), Some("3.11.4"));
        assert_eq!(
            details.packages,
            vec![
                PackageStatus {
                    name: "Appium-Python-Client".into(),
                    version: Some(UNKNOWN_VERSION.into()),
                },
                PackageStatus {
                    name: "selenium".into(),
                    version: Some("4.18.1".into()),
                },
                PackageStatus {
                    name: "pydantic".into(),
                    version: Some("2.6.4".into()),
                },
            ]
        );
        assert!(!ui.contains("pip install"));
    }

    #[test]
    fn one_missing_package_fails_but_records_all() {
        let mut probe = MockProbe::new();
        probe.respond("python3 --version", "Python 3.11.4");
        probe.respond(&import_line("appium"), "version:");
        probe.respond_failure(&import_line("selenium"), 1);
        probe.respond(&import_line("pydantic"), "version:2.6.4");

        let (result, ui) = run(&probe);

        assert!(!result.success);
        let packages = &libraries(&result).packages;
        assert_eq!(packages.len(), 3);
        assert!(packages[0].is_installed());
        assert!(!packages[1].is_installed());
        assert!(packages[2].is_installed());
        assert_eq!(ui.errors(), ["selenium not installed"]);
        assert!(ui.contains("pip install -r requirements.txt"));
        assert!(ui.contains("pip install \"selenium>=4.18.0\""));
    }

    #[test]
    fn missing_interpreter_marks_every_package_missing() {
        let probe = MockProbe::new();

        let (result, ui) = run(&probe);

        assert!(!result.success);
        let details = libraries(&result);
        assert!(details.python_version.is_none());
        assert!(details.packages.iter().all(|p| !p.is_installed()));
        assert_eq!(details.packages.len(), REQUIRED_PACKAGES.len());
        assert!(ui.errors()[0].contains("Python interpreter unavailable"));
    }

    #[test]
    fn custom_interpreter_is_used() {
        let mut probe = MockProbe::new();
        probe.respond("py312 --version", "Python 3.12.1");
        for package in REQUIRED_PACKAGES {
            probe.respond(&format!("py312 -c {}", import_script(package.module)), "version:1.0.0");
        }
        let mut settings = Settings::for_platform(Platform::Linux);
        settings.python = "py312".to_string();
        let mut ui = MockUI::new();

        let result = {
            let mut ctx = CheckContext::new(&probe, &mut ui, &settings);
            check_libraries(&mut ctx)
        };

        assert!(result.success);
        assert!(!probe.was_called("python3 --version"));
    }
}
