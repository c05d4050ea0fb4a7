//! `seqlink show` command.

use std::path::Path;

use crate::adapters::LiveFileSystem;
use crate::spec::ComponentSpec;
use crate::store::SpecStore;

/// Execute the `show` command.
///
/// When `name` is provided, pretty-prints the component spec and its
/// channels. When omitted, lists all stored spec names.
///
/// # Errors
///
/// Returns an error string if spec loading fails.
pub fn run(name: Option<&str>) -> Result<(), String> {
    run_at(&super::store_root(), name)
}

fn run_at(root: &Path, name: Option<&str>) -> Result<(), String> {
    let fs = LiveFileSystem;
    let store = SpecStore::new(&fs, root);

    if let Some(spec_name) = name {
        let spec = store.load_component_spec(spec_name)?;
        print_spec(&spec);
        Ok(())
    } else {
        let names = store.list_component_specs()?;
        if names.is_empty() {
            println!("No component specs found in store.");
        } else {
            println!("Available component specs:");
            for name in &names {
                println!("  {name}");
            }
            println!("\nUse `seqlink show <NAME>` to view details.");
        }
        Ok(())
    }
}

fn print_spec(spec: &ComponentSpec) {
    println!("Component: {}", spec.name);
    println!("Transition system: {}", spec.transition_system);

    if spec.linked_features.is_empty() {
        println!("No linked feature channels.");
    } else {
        println!("\nLinked feature channels:");
        for channel in &spec.linked_features {
            println!(
                "  - {} (fml: {}, translator: {})",
                channel.name, channel.fml, channel.source_translator
            );
        }
    }
}
