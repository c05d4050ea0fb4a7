//! Core component spec type.

use serde::{Deserialize, Serialize};

use super::channel::LinkedFeatureChannel;

/// A pipeline component specification consumed by linker selection.
///
/// Built once by the configuration loader and treated as immutable by
/// everything downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Unique component identifier (e.g., "tagger").
    pub name: String,
    /// Registered name of the transition system driving the component.
    pub transition_system: String,
    /// Linked feature channels, in declaration order.
    #[serde(default)]
    pub linked_features: Vec<LinkedFeatureChannel>,
}

impl ComponentSpec {
    /// Finds a linked channel by name.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&LinkedFeatureChannel> {
        self.linked_features.iter().find(|c| c.name == name)
    }
}
