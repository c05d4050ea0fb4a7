//! Fixed-order registry of linker variants.

use crate::spec::{ComponentSpec, LinkedFeatureChannel};

use super::identity::IdentitySequenceLinker;
use super::{LinkerError, SequenceLinker};

/// One registered variant: name, support predicate, constructor.
struct VariantEntry {
    name: &'static str,
    supports: fn(&LinkedFeatureChannel, &ComponentSpec) -> bool,
    construct: fn(&LinkedFeatureChannel, &ComponentSpec) -> Box<dyn SequenceLinker>,
}

fn construct_identity(
    _channel: &LinkedFeatureChannel,
    _spec: &ComponentSpec,
) -> Box<dyn SequenceLinker> {
    Box::new(IdentitySequenceLinker)
}

/// Registered variants, evaluated in declaration order.
static VARIANTS: &[VariantEntry] = &[VariantEntry {
    name: IdentitySequenceLinker::NAME,
    supports: IdentitySequenceLinker::supports,
    construct: construct_identity,
}];

/// Selects the unique registered variant that supports the channel.
///
/// Every predicate is evaluated, so an over-eager registry surfaces as
/// [`LinkerError::AmbiguousVariant`] instead of silently resolving by
/// registration order.
///
/// # Errors
///
/// Returns [`LinkerError::NoSupportingVariant`] if no variant matches, or
/// [`LinkerError::AmbiguousVariant`] if more than one does.
pub fn select(
    channel: &LinkedFeatureChannel,
    spec: &ComponentSpec,
) -> Result<&'static str, LinkerError> {
    let names: Vec<&'static str> = VARIANTS
        .iter()
        .filter(|v| (v.supports)(channel, spec))
        .map(|v| v.name)
        .collect();

    if names.len() > 1 {
        return Err(LinkerError::AmbiguousVariant { fml: channel.fml.clone(), names });
    }

    names.first().copied().ok_or_else(|| LinkerError::NoSupportingVariant {
        fml: channel.fml.clone(),
        translator: channel.source_translator.clone(),
        transition_system: spec.transition_system.clone(),
    })
}

/// Constructs a linker instance by registered name.
///
/// The (channel, spec) context is forwarded to the variant's constructor for
/// variants that configure themselves from it; construction allocates the
/// instance and nothing else.
///
/// # Errors
///
/// Returns [`LinkerError::UnknownVariant`] if `name` is not registered.
pub fn new_linker(
    name: &str,
    channel: &LinkedFeatureChannel,
    spec: &ComponentSpec,
) -> Result<Box<dyn SequenceLinker>, LinkerError> {
    VARIANTS
        .iter()
        .find(|v| v.name == name)
        .map(|v| (v.construct)(channel, spec))
        .ok_or_else(|| LinkerError::UnknownVariant { name: name.to_string() })
}
