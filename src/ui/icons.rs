//! Status vocabulary for the summary table.

use super::theme::PreflightTheme;

/// Outcome of a single check as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The check passed.
    Passed,
    /// The check failed.
    Failed,
}

impl StatusKind {
    /// Status for a check's success flag.
    pub fn from_success(success: bool) -> Self {
        if success {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Passed => "✓",
            Self::Failed => "✗",
        }
    }

    /// Word shown next to the icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }

    /// Styled icon and label using the given theme.
    pub fn styled(self, theme: &PreflightTheme) -> String {
        let text = format!("{} {}", self.icon(), self.label());
        match self {
            Self::Passed => theme.success.apply_to(text).to_string(),
            Self::Failed => theme.error.apply_to(text).to_string(),
        }
    }
}
