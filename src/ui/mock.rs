//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirm answers can be queued ahead of
//! time.
//!
//! # Example
//!
//! ```
//! use flowstash::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(true);
//!
//! // Use ui in code under test...
//! ui.success("Flow saved");
//!
//! // Assert on captured interactions
//! assert!(ui.successes().contains(&"Flow saved".to_string()));
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-queued confirm answers.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    confirms_shown: Vec<String>,
    confirm_answers: VecDeque<bool>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Queue an answer for the next confirm prompt.
    ///
    /// Queued answers are consumed in order; once exhausted, `confirm`
    /// falls back to the prompt's default.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
        self.interactive = true;
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
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

    /// Get the questions shown via confirm prompts.
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }

    /// Check if any captured output contains the given text.
    pub fn output_contains(&self, text: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms_shown.push(question.to_string());
        Ok(self.confirm_answers.pop_front().unwrap_or(default))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_captures_all_message_kinds() {
        let mut ui = MockUI::new();
        ui.message("info");
        ui.success("ok");
        ui.warning("careful");
        ui.error("broken");

        assert_eq!(ui.messages(), &["info".to_string()]);
        assert_eq!(ui.successes(), &["ok".to_string()]);
        assert_eq!(ui.warnings(), &["careful".to_string()]);
        assert_eq!(ui.errors(), &["broken".to_string()]);
        assert!(ui.output_contains("careful"));
        assert!(!ui.output_contains("absent"));
    }

    #[test]
    fn confirm_consumes_queued_answers_then_default() {
        let mut ui = MockUI::new();
        ui.queue_confirm(false);

        assert!(!ui.confirm("Delete?", true).unwrap());
        assert!(ui.confirm("Delete?", true).unwrap());
        assert_eq!(ui.confirms_shown().len(), 2);
    }
}
