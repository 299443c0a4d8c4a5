//! Rename command implementation.
//!
//! A rename is load + re-keyed save + delete of the old entry. The embedded
//! document name is rewritten to the new key so key and name stay equal.

use anyhow::anyhow;

use crate::cli::args::RenameArgs;
use crate::error::FlowstashError;
use crate::flow::FlowStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rename command implementation.
pub struct RenameCommand {
    store: FlowStore,
    args: RenameArgs,
}

impl RenameCommand {
    /// Create a new rename command.
    pub fn new(store: FlowStore, args: RenameArgs) -> Self {
        Self { store, args }
    }
}

impl Command for RenameCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut flow =
            self.store
                .load(&self.args.from)?
                .ok_or_else(|| FlowstashError::FlowNotFound {
                    name: self.args.from.clone(),
                })?;

        if !self.args.force && self.store.load(&self.args.to)?.is_some() {
            return Err(anyhow!(
                "Flow '{}' already exists (use --force to overwrite)",
                self.args.to
            )
            .into());
        }

        flow.name = self.args.to.clone();
        self.store.save(&self.args.to, flow)?;
        self.store.delete(&self.args.from)?;

        ui.success(&format!(
            "Renamed flow '{}' to '{}'",
            self.args.from, self.args.to
        ));

        Ok(CommandResult::success())
    }
}
