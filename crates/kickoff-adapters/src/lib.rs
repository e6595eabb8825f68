//! Infrastructure adapters for kickoff.
//!
//! This crate implements the ports defined in `kickoff_core::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod opener;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use opener::{CommandOpener, NullOpener, RecordingOpener};
