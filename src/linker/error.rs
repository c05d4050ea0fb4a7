//! Error type for linker selection, construction, and link extraction.

use thiserror::Error;

/// Errors surfaced by the linker registry and linker instances.
///
/// All variants are configuration or caller errors; none are retryable.
/// The caller decides whether to abort startup or propagate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkerError {
    /// No registered variant supports the channel.
    #[error(
        "no sequence linker supports channel '{fml}' (translator '{translator}') \
         under transition system '{transition_system}'"
    )]
    NoSupportingVariant {
        /// Feature markup string of the offending channel.
        fml: String,
        /// Source translator of the offending channel.
        translator: String,
        /// Transition system of the owning component spec.
        transition_system: String,
    },

    /// More than one registered variant claims the channel.
    #[error("multiple sequence linkers support channel '{fml}': {names:?}")]
    AmbiguousVariant {
        /// Feature markup string of the offending channel.
        fml: String,
        /// Names of all matching variants, in registration order.
        names: Vec<&'static str>,
    },

    /// The requested variant name is not registered.
    #[error("unknown sequence linker variant '{name}'")]
    UnknownVariant {
        /// The unmatched variant name.
        name: String,
    },

    /// A negative sequence length was requested.
    #[error("invalid sequence length {length}")]
    InvalidLength {
        /// The offending length.
        length: i32,
    },
}
