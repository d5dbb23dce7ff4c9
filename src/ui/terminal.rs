//! Styled terminal output.

use console::Term;
use std::io::Write;

use super::{should_use_colors, PreflightTheme, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: PreflightTheme,
}

impl TerminalUI {
    /// Create a terminal UI, picking a colored or plain theme.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            PreflightTheme::new()
        } else {
            PreflightTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn header(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn info(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
    }

    fn theme(&self) -> &PreflightTheme {
        &self.theme
    }
}
