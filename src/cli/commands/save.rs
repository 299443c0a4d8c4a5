//! Save command implementation.
//!
//! Reads a flow document from a JSON file (or stdin) and upserts it into
//! the store under the given name.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::cli::args::SaveArgs;
use crate::flow::{FlowDocument, FlowStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The save command implementation.
pub struct SaveCommand {
    store: FlowStore,
    args: SaveArgs,
}

impl SaveCommand {
    /// Create a new save command.
    pub fn new(store: FlowStore, args: SaveArgs) -> Self {
        Self { store, args }
    }
}

impl Command for SaveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let raw = read_document(&self.args.file)?;
        let flow: FlowDocument = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse flow document {:?}", self.args.file))?;

        let node_count = flow.node_count();
        let edge_count = flow.edge_count();
        self.store.save(&self.args.name, flow)?;

        ui.success(&format!(
            "Saved flow '{}' ({} nodes, {} edges)",
            self.args.name, node_count, edge_count
        ));

        Ok(CommandResult::success())
    }
}

/// Read the document text from a file, or stdin when the path is `-`.
fn read_document(path: &Path) -> crate::error::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read flow document from stdin")?;
        return Ok(buf);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(content)
}
