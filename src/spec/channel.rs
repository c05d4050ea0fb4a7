//! Linked feature channel type.

use serde::{Deserialize, Serialize};

/// One linked feature channel within a pipeline component.
///
/// A channel names the upstream signal it reads via its feature markup
/// string (`fml`) and the translator that maps source steps onto link
/// targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedFeatureChannel {
    /// Channel identity within its parent component spec (e.g., "tokens").
    pub name: String,
    /// Feature markup string identifying which upstream signal the channel reads.
    pub fml: String,
    /// Name of the translator that maps source indices onto link targets.
    pub source_translator: String,
}
