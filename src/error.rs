//! Error types for preflight operations.
//!
//! This module defines [`PreflightError`], the error type produced when a
//! probe cannot confirm a tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are converted into printed guidance by the checkers and
//!   never abort a run
//! - Use `anyhow::Error` (via `PreflightError::Other`) for unexpected errors
//! - All messages name the tool with its human-readable label

use std::time::Duration;
use thiserror::Error;

/// Core error type for preflight probes.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// The executable is not on the search path.
    #[error("{label} not found (command: {command})")]
    ToolNotFound { label: String, command: String },

    /// The executable ran but exited unsuccessfully.
    #[error("{label} failed (exit code: {})", describe_code(.code))]
    CommandFailed { label: String, code: Option<i32> },

    /// The executable did not finish within its time budget.
    #[error("{label} timed out after {}s", .timeout.as_secs())]
    TimedOut { label: String, timeout: Duration },

    /// The executable could not be run at all.
    #[error("{label} detection failed: {message}")]
    DetectionFailed { label: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;
