//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::GeneratorResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tbplugin_adapters::filesystem::LocalFilesystem` (production)
/// - `tbplugin_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Implementations report failures as
/// [`ApplicationError::Io`](crate::application::ApplicationError::Io).
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GeneratorResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> GeneratorResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the user's identity, used when `--author` / `--email` are absent.
///
/// Every lookup is optional: a missing or failing source yields `None`,
/// never an error.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    fn author_name(&self) -> Option<String>;

    fn author_email(&self) -> Option<String>;

    /// GitHub account for repository URLs.
    fn github_user(&self) -> Option<String>;
}
