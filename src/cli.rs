//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `seqlink`.
#[derive(Debug, Parser)]
#[command(name = "seqlink", version, about = "Resolve sequence linkers for component specs")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List stored component specs, or print one spec's channels.
    Show {
        /// Component spec name to display.
        name: Option<String>,
    },
    /// Print the channel resolution report for a stored spec.
    Resolve {
        /// Component spec name to resolve.
        name: String,
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the link array for one channel of a stored spec.
    Links {
        /// Component spec name.
        name: String,
        /// Channel name within the spec.
        #[arg(long)]
        channel: String,
        /// Number of sequence steps.
        #[arg(long, allow_hyphen_values = true)]
        length: i32,
    },
    /// Fail unless every linked channel of a spec resolves.
    Validate {
        /// Component spec name to validate.
        name: Option<String>,
        /// Validate every stored spec.
        #[arg(long)]
        all: bool,
    },
}
