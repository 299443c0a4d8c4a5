//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage (interactive or headless)
//! - [`MockUI`] for capturing interactions in tests
//!
//! # Example
//!
//! ```
//! use flowstash::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("Flow saved");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, FlowTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question. Non-interactive implementations return `default`.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Create the appropriate UI for the current environment.
pub fn create_ui(is_interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(is_interactive, mode))
}
