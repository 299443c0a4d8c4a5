//! Show command implementation.

use anyhow::Context;

use crate::cli::args::ShowArgs;
use crate::error::FlowstashError;
use crate::flow::FlowStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    store: FlowStore,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(store: FlowStore, args: ShowArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let flow = self
            .store
            .load(&self.args.name)?
            .ok_or_else(|| FlowstashError::FlowNotFound {
                name: self.args.name.clone(),
            })?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&flow)
                .context("Failed to serialize flow document")?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "{}: {} nodes, {} edges",
            flow.name,
            flow.node_count(),
            flow.edge_count()
        ));

        if ui.output_mode().shows_detail() {
            for node in &flow.nodes {
                ui.message(&format!("  node {}", node.id().unwrap_or("<unnamed>")));
            }
            for edge in &flow.edges {
                ui.message(&format!("  edge {}", edge.id().unwrap_or("<unnamed>")));
            }
        }

        Ok(CommandResult::success())
    }
}
