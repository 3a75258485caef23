//! Infrastructure adapters for the Textbringer plugin generator.
//!
//! This crate implements the ports defined in `tbplugin-core::application::ports`.
//! All I/O lives here: the local disk and the `git` executable.

pub mod filesystem;
pub mod identity;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use identity::{GitConfigIdentity, StaticIdentity};
