//! Export command implementation.

use std::fs;

use anyhow::Context;

use crate::cli::args::ExportArgs;
use crate::error::FlowstashError;
use crate::flow::FlowStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand {
    store: FlowStore,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(store: FlowStore, args: ExportArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let flow = self
            .store
            .load(&self.args.name)?
            .ok_or_else(|| FlowstashError::FlowNotFound {
                name: self.args.name.clone(),
            })?;

        let json =
            serde_json::to_string_pretty(&flow).context("Failed to serialize flow document")?;

        match &self.args.output {
            Some(path) => {
                fs::write(path, &json).with_context(|| format!("Failed to write {:?}", path))?;
                ui.success(&format!(
                    "Exported flow '{}' to {}",
                    self.args.name,
                    path.display()
                ));
            }
            None => println!("{}", json),
        }

        Ok(CommandResult::success())
    }
}
