//! Identity linker: step `i` links to source step `i`.

use crate::batch::InputBatchCache;
use crate::spec::{ComponentSpec, LinkedFeatureChannel};

use super::{LinkerError, SequenceLinker};

/// Links each step of a sequence to the same-numbered source step.
///
/// Covers left-to-right components that read the focus of the input
/// directly, where source index and target index coincide.
#[derive(Debug, Default)]
pub struct IdentitySequenceLinker;

impl IdentitySequenceLinker {
    /// Registered variant name.
    pub const NAME: &'static str = "IdentitySequenceLinker";

    /// Returns `true` if the channel reads the input focus through the
    /// identity translator in a shift-only component.
    #[must_use]
    pub fn supports(channel: &LinkedFeatureChannel, spec: &ComponentSpec) -> bool {
        spec.transition_system == "shift-only"
            && (channel.fml == "input.focus" || channel.fml == "char-input.focus")
            && channel.source_translator == "identity"
    }
}

impl SequenceLinker for IdentitySequenceLinker {
    fn get_links(&self, length: i32, _batch: &InputBatchCache) -> Result<Vec<i32>, LinkerError> {
        if length < 0 {
            return Err(LinkerError::InvalidLength { length });
        }
        Ok((0..length).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn links_are_the_identity_mapping() {
        let linker = IdentitySequenceLinker;
        let links = linker.get_links(10, &InputBatchCache::empty()).unwrap();
        assert_eq!(links, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn zero_length_yields_empty_links() {
        let linker = IdentitySequenceLinker;
        let links = linker.get_links(0, &InputBatchCache::empty()).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn negative_length_is_rejected() {
        let linker = IdentitySequenceLinker;
        let err = linker.get_links(-1, &InputBatchCache::empty()).unwrap_err();
        assert_eq!(err, LinkerError::InvalidLength { length: -1 });
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn batch_contents_do_not_affect_links() {
        let linker = IdentitySequenceLinker;
        let batch = InputBatchCache::new(vec!["a".to_string(), "b".to_string()]);
        let links = linker.get_links(4, &batch).unwrap();
        assert_eq!(links, vec![0, 1, 2, 3]);
    }
}
