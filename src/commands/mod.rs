//! Command dispatch and handlers.

pub mod links;
pub mod resolve;
pub mod show;
pub mod validate;

use std::env;
use std::path::PathBuf;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Show { name } => show::run(name.as_deref()),
        Command::Resolve { name, json } => resolve::run(name, *json),
        Command::Links { name, channel, length } => links::run(name, channel, *length),
        Command::Validate { name, all } => validate::run(name.as_deref(), *all),
    }
}

/// Root directory of the component spec store.
///
/// Honors `SEQLINK_STORE`, defaulting to `.seqlink` in the working directory.
pub(crate) fn store_root() -> PathBuf {
    env::var("SEQLINK_STORE").map_or_else(|_| PathBuf::from(".seqlink"), PathBuf::from)
}
