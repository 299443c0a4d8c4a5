//! Terminal UI.

use std::io::Write;

use console::Term;
use dialoguer::Confirm;

use crate::error::Result;

use super::{should_use_colors, FlowTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Covers both interactive and headless usage: when not interactive,
/// [`UserInterface::confirm`] resolves to its default without prompting.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: FlowTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            FlowTheme::new()
        } else {
            FlowTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
            interactive,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.interactive {
            return Ok(default);
        }

        let answer = Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| anyhow::anyhow!("Prompt failed: {}", e))?;

        Ok(answer)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
