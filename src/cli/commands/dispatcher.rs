//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::error::Result;
use crate::flow::FlowStore;
use crate::storage::FileSlot;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    store_root: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher, optionally overriding the store root.
    pub fn new(store_root: Option<PathBuf>) -> Self {
        Self { store_root }
    }

    /// Open the flow store at the configured location.
    fn open_store(&self) -> FlowStore {
        match &self.store_root {
            Some(root) => FlowStore::new(Box::new(FileSlot::new(root))),
            None => FlowStore::open_default(),
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.open_store(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(self.open_store(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Save(args)) => {
                let cmd = super::save::SaveCommand::new(self.open_store(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Delete(args)) => {
                let cmd = super::delete::DeleteCommand::new(self.open_store(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Rename(args)) => {
                let cmd = super::rename::RenameCommand::new(self.open_store(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Export(args)) => {
                let cmd = super::export::ExportCommand::new(self.open_store(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to listing the store
                let cmd =
                    super::list::ListCommand::new(self.open_store(), ListArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
