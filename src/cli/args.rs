//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Flowstash - local store for campaign sequence flows.
#[derive(Debug, Parser)]
#[command(name = "flowstash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the flow store (overrides ~/.flowstash)
    #[arg(short, long, global = true, env = "FLOWSTASH_STORE")]
    pub store: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; assume the safe answer
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List stored flows (default if no command specified)
    List(ListArgs),

    /// Show a stored flow
    Show(ShowArgs),

    /// Save a flow document from a JSON file
    Save(SaveArgs),

    /// Delete a stored flow, or the whole store
    Delete(DeleteArgs),

    /// Rename a stored flow
    Rename(RenameArgs),

    /// Export a stored flow as JSON
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Print the full collection as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Name of the flow to show
    pub name: String,

    /// Print the full document as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `save` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SaveArgs {
    /// Name to store the flow under (must match the document's name)
    pub name: String,

    /// Path to the flow document JSON, or `-` for stdin
    pub file: PathBuf,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteArgs {
    /// Name of the flow to delete
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub name: Option<String>,

    /// Delete every stored flow
    #[arg(long)]
    pub all: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `rename` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenameArgs {
    /// Current flow name
    pub from: String,

    /// New flow name
    pub to: String,

    /// Overwrite an existing flow under the new name
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// Name of the flow to export
    pub name: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["flowstash"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn store_flag_is_global() {
        let cli = Cli::parse_from(["flowstash", "list", "--store", "/tmp/flows"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/flows")));
    }

    #[test]
    fn delete_requires_name_or_all() {
        assert!(Cli::try_parse_from(["flowstash", "delete"]).is_err());
        assert!(Cli::try_parse_from(["flowstash", "delete", "Drip"]).is_ok());
        assert!(Cli::try_parse_from(["flowstash", "delete", "--all"]).is_ok());
    }

    #[test]
    fn delete_name_conflicts_with_all() {
        assert!(Cli::try_parse_from(["flowstash", "delete", "Drip", "--all"]).is_err());
    }

    #[test]
    fn save_takes_name_and_file() {
        let cli = Cli::parse_from(["flowstash", "save", "Q3 Outreach", "flow.json"]);
        match cli.command {
            Some(Commands::Save(args)) => {
                assert_eq!(args.name, "Q3 Outreach");
                assert_eq!(args.file, PathBuf::from("flow.json"));
            }
            _ => panic!("expected save command"),
        }
    }
}
