//! Component spec store — persistence layer for component specs.
//!
//! The store lives outside the runtime and uses the `FileSystem` port for
//! all I/O. Directory layout:
//!
//! ```text
//! <root>/
//!   └── components/
//! ```

use std::path::{Path, PathBuf};

use crate::ports::FileSystem;
use crate::spec::ComponentSpec;

/// Persistence layer for component specs.
///
/// All I/O goes through the filesystem port so that the store works with
/// both the live adapter and in-memory test doubles.
pub struct SpecStore<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
}

impl<'a> SpecStore<'a> {
    /// Creates a new store rooted at the given path.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, root: &Path) -> Self {
        Self { fs, root: root.to_path_buf() }
    }

    /// Saves a component spec as YAML in `<root>/components/<name>.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save_component_spec(&self, spec: &ComponentSpec) -> Result<(), String> {
        let yaml = serde_yaml::to_string(spec)
            .map_err(|e| format!("Failed to serialize component spec {}: {e}", spec.name))?;
        let path = self.component_path(&spec.name);
        self.fs
            .write(&path, &yaml)
            .map_err(|e| format!("Failed to write component spec {}: {e}", spec.name))
    }

    /// Loads a component spec by name from `<root>/components/<name>.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_component_spec(&self, name: &str) -> Result<ComponentSpec, String> {
        let path = self.component_path(name);
        let contents = self
            .fs
            .read_to_string(&path)
            .map_err(|e| format!("Failed to read component spec {name}: {e}"))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse component spec {name}: {e}"))
    }

    /// Lists all component spec names in the store.
    ///
    /// Returns names derived from filenames (without the `.yaml` extension).
    ///
    /// # Errors
    ///
    /// Returns an error if the components directory cannot be listed.
    pub fn list_component_specs(&self) -> Result<Vec<String>, String> {
        let components_dir = self.root.join("components");
        if !self.fs.exists(&components_dir) {
            return Ok(Vec::new());
        }
        let entries = self
            .fs
            .list_dir(&components_dir)
            .map_err(|e| format!("Failed to list components directory: {e}"))?;
        Ok(entries
            .into_iter()
            .filter_map(|name| name.strip_suffix(".yaml").map(String::from))
            .collect())
    }

    fn component_path(&self, name: &str) -> PathBuf {
        self.root.join("components").join(format!("{name}.yaml"))
    }
}
