//! Mock probe implementation for testing.
//!
//! `MockProbe` implements the `Probe` trait with scripted responses keyed by
//! the full command line (`"node --version"`). A tool is "on PATH" as soon as
//! any response is registered for it.
//!
//! # Example
//!
//! ```
//! use appium_preflight::probe::{check_command, MockProbe};
//! use std::time::Duration;
//!
//! let mut probe = MockProbe::new();
//! probe.respond("node --version", "v20.11.1");
//!
//! let out = check_command(&probe, "node", &["--version"], "Node.js", Duration::from_secs(10));
//! assert_eq!(out.unwrap(), "v20.11.1");
//! assert!(probe.was_called("node --version"));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{PreflightError, Result};
use crate::shell::CommandResult;

use super::Probe;

/// Directory reported as the location of every mock tool.
const MOCK_BIN_DIR: &str = "/mock/bin";

#[derive(Debug, Clone)]
enum MockResponse {
    Output {
        stdout: String,
        stderr: String,
        exit_code: i32,
    },
    Timeout,
    Error(String),
}

/// Scripted probe that records every command it is asked to run.
#[derive(Debug, Default)]
pub struct MockProbe {
    tools: HashSet<String>,
    responses: HashMap<String, MockResponse>,
    env: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl MockProbe {
    /// Create an empty probe: no tools, no environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a tool as present on PATH without scripting any output.
    pub fn add_tool(&mut self, tool: &str) {
        self.tools.insert(tool.to_string());
    }

    /// Script a successful command with the given stdout.
    pub fn respond(&mut self, command_line: &str, stdout: &str) {
        self.respond_output(command_line, stdout, "");
    }

    /// Script a successful command with both output streams.
    pub fn respond_output(&mut self, command_line: &str, stdout: &str, stderr: &str) {
        self.insert(
            command_line,
            MockResponse::Output {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                exit_code: 0,
            },
        );
    }

    /// Script a command that exits with a non-zero code.
    pub fn respond_failure(&mut self, command_line: &str, exit_code: i32) {
        self.insert(
            command_line,
            MockResponse::Output {
                stdout: String::new(),
                stderr: String::new(),
                exit_code,
            },
        );
    }

    /// Script a command that exceeds its timeout.
    pub fn respond_timeout(&mut self, command_line: &str) {
        self.insert(command_line, MockResponse::Timeout);
    }

    /// Script a command that cannot be spawned.
    pub fn respond_error(&mut self, command_line: &str, message: &str) {
        self.insert(command_line, MockResponse::Error(message.to_string()));
    }

    /// Set an environment variable visible through the probe.
    pub fn set_env(&mut self, name: &str, value: &str) {
        self.env.insert(name.to_string(), value.to_string());
    }

    /// Command lines executed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether the given command line was executed.
    pub fn was_called(&self, command_line: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command_line)
    }

    fn insert(&mut self, command_line: &str, response: MockResponse) {
        if let Some(tool) = command_line.split_whitespace().next() {
            self.tools.insert(tool.to_string());
        }
        self.responses.insert(command_line.to_string(), response);
    }
}

impl Probe for MockProbe {
    fn locate(&self, command: &str) -> Option<PathBuf> {
        self.tools
            .contains(command)
            .then(|| Path::new(MOCK_BIN_DIR).join(command))
    }

    fn execute(&self, program: &Path, args: &[&str], timeout: Duration) -> Result<CommandResult> {
        let tool = program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let command_line = if args.is_empty() {
            tool
        } else {
            format!("{} {}", tool, args.join(" "))
        };
        self.calls.borrow_mut().push(command_line.clone());

        match self.responses.get(&command_line) {
            Some(MockResponse::Output {
                stdout,
                stderr,
                exit_code: 0,
            }) => Ok(CommandResult::success(
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Some(MockResponse::Output {
                stdout,
                stderr,
                exit_code,
            }) => Ok(CommandResult::failure(
                Some(*exit_code),
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Some(MockResponse::Timeout) => Ok(CommandResult::timeout(timeout)),
            Some(MockResponse::Error(message)) => Err(PreflightError::Other(anyhow::anyhow!(
                "{}",
                message
            ))),
            None => Err(PreflightError::Other(anyhow::anyhow!(
                "no scripted response for `{}`",
                command_line
            ))),
        }
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_tool_is_not_located() {
        let probe = MockProbe::new();
        assert!(probe.locate("adb").is_none());
    }

    #[test]
    fn response_registers_tool() {
        let mut probe = MockProbe::new();
        probe.respond("adb version", "Android Debug Bridge version 1.0.41");
        assert_eq!(probe.locate("adb"), Some(PathBuf::from("/mock/bin/adb")));
    }

    #[test]
    fn execute_records_calls() {
        let mut probe = MockProbe::new();
        probe.respond("adb devices -l", "List of devices attached");
        let program = probe.locate("adb").unwrap();
        let result = probe
            .execute(&program, &["devices", "-l"], Duration::from_secs(1))
            .unwrap();
        assert!(result.success);
        assert_eq!(probe.calls(), vec!["adb devices -l".to_string()]);
    }

    #[test]
    fn unscripted_command_errors() {
        let mut probe = MockProbe::new();
        probe.add_tool("npm");
        let program = probe.locate("npm").unwrap();
        assert!(probe
            .execute(&program, &["--version"], Duration::from_secs(1))
            .is_err());
    }

    #[test]
    fn env_ignores_empty_values() {
        let mut probe = MockProbe::new();
        probe.set_env("ANDROID_HOME", "");
        probe.set_env("ANDROID_SDK_ROOT", "/opt/android");
        assert!(probe.env_var("ANDROID_HOME").is_none());
        assert_eq!(
            probe.env_var("ANDROID_SDK_ROOT"),
            Some("/opt/android".to_string())
        );
    }
}
