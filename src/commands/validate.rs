//! `seqlink validate` command.

use std::path::Path;

use crate::adapters::LiveFileSystem;
use crate::resolve::{format_report, resolve_channels};
use crate::store::SpecStore;

/// Execute the `validate` command.
///
/// Resolves every linked channel of the named spec (or of every stored spec
/// with `--all`) and fails if any channel has no supporting linker.
///
/// # Errors
///
/// Returns an error string if spec loading fails, if neither a name nor
/// `--all` was given, or if any channel fails to resolve.
pub fn run(name: Option<&str>, all: bool) -> Result<(), String> {
    run_at(&super::store_root(), name, all)
}

fn run_at(root: &Path, name: Option<&str>, all: bool) -> Result<(), String> {
    let fs = LiveFileSystem;
    let store = SpecStore::new(&fs, root);

    let names = if all {
        store.list_component_specs()?
    } else {
        match name {
            Some(n) => vec![n.to_string()],
            None => return Err("Provide a spec NAME or use --all".to_string()),
        }
    };

    let mut failures = Vec::new();
    for spec_name in &names {
        let spec = store.load_component_spec(spec_name)?;
        let report = resolve_channels(&spec);
        println!("{}\n", format_report(&report));
        for channel in report.unresolved() {
            failures.push(format!("{spec_name}: channel {channel} has no supporting linker"));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
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

    fn spec_with_translator(name: &str, translator: &str) -> ComponentSpec {
        ComponentSpec {
            name: name.to_string(),
            transition_system: "shift-only".to_string(),
            linked_features: vec![LinkedFeatureChannel {
                name: "tokens".to_string(),
                fml: "input.focus".to_string(),
                source_translator: translator.to_string(),
            }],
        }
    }

    #[test]
    fn validate_without_name_or_all_is_an_error() {
        let root = std::env::temp_dir().join("seqlink_validate_no_args");
        let err = run_at(&root, None, false).unwrap_err();
        assert!(err.contains("--all"));
    }

    #[test]
    fn validate_passes_for_resolvable_spec() {
        let root = std::env::temp_dir().join("seqlink_validate_pass");
        write_spec(&root, &spec_with_translator("tagger", "identity"));

        let result = run_at(&root, Some("tagger"), false);

        let _ = std::fs::remove_dir_all(&root);
        assert!(result.is_ok());
    }

    #[test]
    fn validate_fails_for_unresolvable_channel() {
        let root = std::env::temp_dir().join("seqlink_validate_fail");
        write_spec(&root, &spec_with_translator("tagger", "history"));

        let result = run_at(&root, Some("tagger"), false);

        let _ = std::fs::remove_dir_all(&root);
        let err = result.unwrap_err();
        assert!(err.contains("tokens"));
        assert!(err.contains("no supporting linker"));
    }

    #[test]
    fn validate_all_covers_every_stored_spec() {
        let root = std::env::temp_dir().join("seqlink_validate_all");
        write_spec(&root, &spec_with_translator("tagger", "identity"));
        write_spec(&root, &spec_with_translator("parser", "history"));

        let result = run_at(&root, None, true);

        let _ = std::fs::remove_dir_all(&root);
        let err = result.unwrap_err();
        assert!(err.contains("parser"));
        assert!(!err.contains("tagger:"));
    }
}
