//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion, both per kind and in a single ordered transcript.

use super::{PreflightTheme, Table, UserInterface};

/// Kind of a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Message,
    Success,
    Warning,
    Error,
    Info,
}

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    theme: PreflightTheme,
    transcript: Vec<(LineKind, String)>,
    headers: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    infos: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI with a plain theme.
    pub fn new() -> Self {
        Self {
            theme: PreflightTheme::plain(),
            transcript: Vec::new(),
            headers: Vec::new(),
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            infos: Vec::new(),
        }
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured plain messages (including rendered tables).
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured informational messages.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Every captured line in output order.
    pub fn transcript(&self) -> &[(LineKind, String)] {
        &self.transcript
    }

    /// Whether any captured line of any kind contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|(_, line)| line.contains(needle))
    }

    fn record(&mut self, kind: LineKind, msg: &str) {
        self.transcript.push((kind, msg.to_string()));
        let bucket = match kind {
            LineKind::Header => &mut self.headers,
            LineKind::Message => &mut self.messages,
            LineKind::Success => &mut self.successes,
            LineKind::Warning => &mut self.warnings,
            LineKind::Error => &mut self.errors,
            LineKind::Info => &mut self.infos,
        };
        bucket.push(msg.to_string());
    }
}

impl UserInterface for MockUI {
    fn header(&mut self, title: &str) {
        self.record(LineKind::Header, title);
    }

    fn message(&mut self, msg: &str) {
        self.record(LineKind::Message, msg);
    }

    fn success(&mut self, msg: &str) {
        self.record(LineKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.record(LineKind::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.record(LineKind::Error, msg);
    }

    fn info(&mut self, msg: &str) {
        self.record(LineKind::Info, msg);
    }

    fn table(&mut self, table: &Table) {
        self.record(LineKind::Message, &table.render());
    }

    fn theme(&self) -> &PreflightTheme {
        &self.theme
    }
}
