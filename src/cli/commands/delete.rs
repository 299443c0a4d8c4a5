//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::flow::FlowStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The delete command implementation.
pub struct DeleteCommand {
    store: FlowStore,
    args: DeleteArgs,
}

impl DeleteCommand {
    /// Create a new delete command.
    pub fn new(store: FlowStore, args: DeleteArgs) -> Self {
        Self { store, args }
    }

    fn delete_all(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        if !self.args.force && !ui.confirm("Delete every stored flow?", false)? {
            ui.message("Aborted.");
            return Ok(CommandResult::success());
        }

        self.store.clear()?;
        ui.success("Deleted all flows");
        Ok(CommandResult::success())
    }

    fn delete_one(
        &self,
        name: &str,
        ui: &mut dyn UserInterface,
    ) -> crate::error::Result<CommandResult> {
        if !self.args.force && !ui.confirm(&format!("Delete flow '{}'?", name), false)? {
            ui.message("Aborted.");
            return Ok(CommandResult::success());
        }

        if self.store.delete(name)? {
            ui.success(&format!("Deleted flow '{}'", name));
        } else {
            ui.warning(&format!("No flow named '{}'", name));
        }

        Ok(CommandResult::success())
    }
}

impl Command for DeleteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        // clap enforces that a name is present unless --all was given
        match (&self.args.name, self.args.all) {
            (Some(name), false) => self.delete_one(name, ui),
            _ => self.delete_all(ui),
        }
    }
}
