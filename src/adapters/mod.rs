//! Adapter implementations for port traits.

pub mod live;

pub use live::LiveFileSystem;
