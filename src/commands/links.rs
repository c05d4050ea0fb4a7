//! `seqlink links` command.

use std::path::Path;

use crate::adapters::LiveFileSystem;
use crate::batch::InputBatchCache;
use crate::linker;
use crate::store::SpecStore;

/// Execute the `links` command.
///
/// Selects and constructs the linker for one named channel of a stored spec,
/// then prints the link array for the given sequence length.
///
/// # Errors
///
/// Returns an error string if spec loading fails, the channel does not
/// exist, or selection, construction, or link extraction fails.
pub fn run(name: &str, channel: &str, length: i32) -> Result<(), String> {
    run_at(&super::store_root(), name, channel, length)
}

fn run_at(root: &Path, name: &str, channel_name: &str, length: i32) -> Result<(), String> {
    let fs = LiveFileSystem;
    let store = SpecStore::new(&fs, root);
    let spec = store.load_component_spec(name)?;
    let channel = spec
        .channel(channel_name)
        .ok_or_else(|| format!("No channel named {channel_name} in component {name}"))?;

    let variant = linker::select(channel, &spec).map_err(|e| e.to_string())?;
    let instance = linker::new_linker(variant, channel, &spec).map_err(|e| e.to_string())?;

    // The CLI has no batch to offer; linkers take the handle without reading it.
    let batch = InputBatchCache::empty();
    let links = instance.get_links(length, &batch).map_err(|e| e.to_string())?;

    println!("Channel {channel_name} -> {variant}");
    println!("{links:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::spec::{ComponentSpec, LinkedFeatureChannel};

    use super::*;

    fn write_spec(root: &Path, spec: &ComponentSpec) {
        let dir = root.join("components");
        std::fs::create_dir_all(&dir).unwrap();
        let yaml = serde_yaml::to_string(spec).unwrap();
        std::fs::write(dir.join(format!("{}.yaml", spec.name)), &yaml).unwrap();
    }

    fn supported_spec() -> ComponentSpec {
        ComponentSpec {
            name: "tagger".to_string(),
            transition_system: "shift-only".to_string(),
            linked_features: vec![LinkedFeatureChannel {
                name: "tokens".to_string(),
                fml: "input.focus".to_string(),
                source_translator: "identity".to_string(),
            }],
        }
    }

    #[test]
    fn links_for_supported_channel() {
        let root = std::env::temp_dir().join("seqlink_links_supported");
        write_spec(&root, &supported_spec());

        let result = run_at(&root, "tagger", "tokens", 10);

        let _ = std::fs::remove_dir_all(&root);
        assert!(result.is_ok());
    }

    #[test]
    fn unknown_channel_is_an_error() {
        let root = std::env::temp_dir().join("seqlink_links_unknown_channel");
        write_spec(&root, &supported_spec());

        let result = run_at(&root, "tagger", "nonexistent", 10);

        let _ = std::fs::remove_dir_all(&root);
        let err = result.unwrap_err();
        assert!(err.contains("nonexistent"));
    }

    #[test]
    fn negative_length_is_an_error() {
        let root = std::env::temp_dir().join("seqlink_links_negative");
        write_spec(&root, &supported_spec());

        let result = run_at(&root, "tagger", "tokens", -1);

        let _ = std::fs::remove_dir_all(&root);
        let err = result.unwrap_err();
        assert!(err.contains("invalid sequence length"));
    }

    #[test]
    fn unsupported_channel_is_an_error() {
        let root = std::env::temp_dir().join("seqlink_links_unsupported");
        let mut spec = supported_spec();
        spec.transition_system = "arc-standard".to_string();
        write_spec(&root, &spec);

        let result = run_at(&root, "tagger", "tokens", 10);

        let _ = std::fs::remove_dir_all(&root);
        let err = result.unwrap_err();
        assert!(err.contains("no sequence linker supports channel"));
    }
}
