//! Sequence linker selection and link extraction.
//!
//! A linker converts a sequence length into per-step link targets for one
//! linked feature channel. Variants live in a fixed-order registry table:
//! [`select`] picks the unique variant whose support predicate matches a
//! channel, and [`new_linker`] constructs an instance by registered name.

mod error;
mod identity;
mod registry;

pub use error::LinkerError;
pub use identity::IdentitySequenceLinker;
pub use registry::{new_linker, select};

use crate::batch::InputBatchCache;

/// A stateless strategy producing link targets for a feature channel.
///
/// Instances are constructed once per channel via [`new_linker`] and may be
/// shared across threads; `get_links` allocates a fresh array on every call
/// and keeps no state between calls.
pub trait SequenceLinker: std::fmt::Debug + Send + Sync {
    /// Produces one link target per step of a `length`-step sequence.
    ///
    /// The batch handle crosses this interface for uniformity with variants
    /// that read the input; implementations must not retain it beyond the
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`LinkerError::InvalidLength`] if `length` is negative.
    fn get_links(&self, length: i32, batch: &InputBatchCache) -> Result<Vec<i32>, LinkerError>;
}
