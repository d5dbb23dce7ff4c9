//! Console reporting.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//! - Theme, status icons, and tables
//!
//! # Example
//!
//! ```
//! use appium_preflight::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.header("Checking Node.js");
//! ui.success("Node.js installed: v20.11.1");
//!
//! assert_eq!(ui.headers(), ["Checking Node.js"]);
//! assert!(ui.successes()[0].contains("v20.11.1"));
//! ```

pub mod icons;
pub mod mock;
pub mod table;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PreflightTheme};

/// Sink for every line the checkers and the summary print.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Show a section banner.
    fn header(&mut self, title: &str);

    /// Display an unstyled message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display an informational or guidance message.
    fn info(&mut self, msg: &str);

    /// Render a table.
    fn table(&mut self, table: &Table) {
        self.message(&table.render());
    }

    /// Theme used to style inline fragments such as table cells.
    fn theme(&self) -> &PreflightTheme;
}
