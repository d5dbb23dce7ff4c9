//! Tool probing: locating executables and asking them for their version.
//!
//! Every checker talks to the host through the [`Probe`] trait so that the
//! same logic can be driven by [`SystemProbe`] in production and by
//! [`MockProbe`] in tests.
//!
//! # Modules
//!
//! - [`mock`] - Scripted probe for tests
//! - [`version`] - Version string extraction

pub mod mock;
pub mod version;

pub use mock::MockProbe;
pub use version::extract_version;

use crate::error::{PreflightError, Result};
use crate::shell::{self, CommandResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Trimmed output of a successful probe, or the reason it failed.
pub type ProbeOutcome = Result<String>;

/// Access to the host: executable lookup, process execution, environment.
pub trait Probe {
    /// Resolve `command` against the search path.
    fn locate(&self, command: &str) -> Option<PathBuf>;

    /// Run `program` with `args`, killing it after `timeout`.
    fn execute(&self, program: &Path, args: &[&str], timeout: Duration) -> Result<CommandResult>;

    /// Read an environment variable. Empty values count as unset.
    fn env_var(&self, name: &str) -> Option<String>;
}

/// Probe backed by the real search path, processes, and environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn locate(&self, command: &str) -> Option<PathBuf> {
        which::which(command).ok()
    }

    fn execute(&self, program: &Path, args: &[&str], timeout: Duration) -> Result<CommandResult> {
        shell::execute(program, args, timeout)
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Locate `command`, run it with `args`, and classify the outcome.
///
/// `label` is the human-readable tool name used in every error message.
pub fn check_command(
    probe: &dyn Probe,
    command: &str,
    args: &[&str],
    label: &str,
    timeout: Duration,
) -> ProbeOutcome {
    let Some(program) = probe.locate(command) else {
        tracing::debug!("{} not found on PATH", command);
        return Err(PreflightError::ToolNotFound {
            label: label.to_string(),
            command: command.to_string(),
        });
    };

    tracing::debug!("Running {} {}", program.display(), args.join(" "));

    let result = probe
        .execute(&program, args, timeout)
        .map_err(|e| PreflightError::DetectionFailed {
            label: label.to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        "{} finished in {:?} (exit code {:?})",
        command,
        result.duration,
        result.exit_code
    );

    if result.timed_out {
        return Err(PreflightError::TimedOut {
            label: label.to_string(),
            timeout,
        });
    }

    if !result.success {
        return Err(PreflightError::CommandFailed {
            label: label.to_string(),
            code: result.exit_code,
        });
    }

    Ok(result.combined_output())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(10);

    #[test]
    fn missing_tool_is_not_found() {
        let probe = MockProbe::new();
        let err = check_command(&probe, "node", &["--version"], "Node.js", TIMEOUT).unwrap_err();
        assert!(matches!(err, PreflightError::ToolNotFound { .. }));
        assert!(err.to_string().contains("Node.js"));
    }

    #[test]
    fn successful_tool_returns_trimmed_output() {
        let mut probe = MockProbe::new();
        probe.respond("node --version", "  v20.11.1\n");
        let output = check_command(&probe, "node", &["--version"], "Node.js", TIMEOUT).unwrap();
        assert_eq!(output, "v20.11.1");
    }

    #[test]
    fn nonzero_exit_is_command_failed() {
        let mut probe = MockProbe::new();
        probe.respond_failure("appium -v", 1);
        let err = check_command(&probe, "appium", &["-v"], "Appium Server", TIMEOUT).unwrap_err();
        assert!(matches!(
            err,
            PreflightError::CommandFailed { code: Some(1), .. }
        ));
    }

    #[test]
    fn timeout_is_timed_out() {
        let mut probe = MockProbe::new();
        probe.respond_timeout("adb version");
        let err = check_command(&probe, "adb", &["version"], "ADB", TIMEOUT).unwrap_err();
        assert!(matches!(err, PreflightError::TimedOut { .. }));
        assert!(err.to_string().contains("10s"));
    }

    #[test]
    fn execution_error_is_detection_failed() {
        let mut probe = MockProbe::new();
        probe.respond_error("npm --version", "permission denied");
        let err = check_command(&probe, "npm", &["--version"], "npm", TIMEOUT).unwrap_err();
        match err {
            PreflightError::DetectionFailed { label, message } => {
                assert_eq!(label, "npm");
                assert!(message.contains("permission denied"));
            }
            other => panic!("Expected DetectionFailed, got {:?}", other),
        }
    }

    #[test]
    fn system_probe_treats_empty_env_as_unset() {
        let probe = SystemProbe;
        assert!(probe
            .env_var("APPIUM_PREFLIGHT_SURELY_UNSET_VARIABLE")
            .is_none());
    }

    #[test]
    fn system_probe_cannot_locate_nonsense() {
        let probe = SystemProbe;
        assert!(probe.locate("this-command-does-not-exist-12345").is_none());
    }
}
