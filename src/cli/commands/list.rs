//! List command implementation.

use crate::cli::args::ListArgs;
use crate::flow::{codec, FlowStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    store: FlowStore,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(store: FlowStore, args: ListArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let collection = self.store.all()?;

        if self.args.json {
            println!("{}", codec::encode(&collection)?);
            return Ok(CommandResult::success());
        }

        if collection.is_empty() {
            ui.message("No flows saved.");
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_detail() {
            ui.message(&format!("Store: {}", self.store.location()));
        }

        println!("{:<32} {:>6} {:>6}", "NAME", "NODES", "EDGES");
        for (name, flow) in &collection {
            println!(
                "{:<32} {:>6} {:>6}",
                name,
                flow.node_count(),
                flow.edge_count()
            );
        }

        Ok(CommandResult::success())
    }
}
