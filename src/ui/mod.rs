//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use graphgist::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_field("Provider", "hosted-gist");
//! assert_eq!(ui.fields(), &[("Provider".to_string(), "hosted-gist".to_string())]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GistTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header line.
    fn show_header(&mut self, title: &str);

    /// Show a labelled value. Shown in every mode.
    fn show_field(&mut self, key: &str, value: &str);

    /// Write a document or JSON payload verbatim. Shown in every mode.
    fn output(&mut self, text: &str);

    /// Check if output goes to a terminal.
    fn is_interactive(&self) -> bool;
}
