//! Core library entry for the `seqlink` CLI.

pub mod adapters;
pub mod batch;
pub mod cli;
pub mod commands;
pub mod linker;
pub mod ports;
pub mod resolve;
pub mod spec;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
