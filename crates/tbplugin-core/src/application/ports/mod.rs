//! Application ports (traits) for external dependencies.
//!
//! Adapters in `tbplugin-adapters` implement these.
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `Filesystem`: directory creation and file writes
//!   - `IdentityProvider`: default author, email and GitHub account

pub mod output;

pub use output::{Filesystem, IdentityProvider};

#[cfg(test)]
pub use output::{MockFilesystem, MockIdentityProvider};
