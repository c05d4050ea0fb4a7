//! `seqlink resolve` command.

use std::path::Path;

use crate::adapters::LiveFileSystem;
use crate::resolve::{format_report, resolve_channels};
use crate::store::SpecStore;

/// Execute the `resolve` command.
///
/// Loads the named component spec, resolves every linked channel against the
/// linker registry, and prints the report. Unresolved channels appear in the
/// report; they do not fail the command.
///
/// # Errors
///
/// Returns an error string if spec loading or JSON serialization fails.
pub fn run(name: &str, json: bool) -> Result<(), String> {
    run_at(&super::store_root(), name, json)
}

fn run_at(root: &Path, name: &str, json: bool) -> Result<(), String> {
    let fs = LiveFileSystem;
    let store = SpecStore::new(&fs, root);
    let spec = store.load_component_spec(name)?;
    let report = resolve_channels(&spec);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report for {name}: {e}"))?;
        println!("{out}");
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}
