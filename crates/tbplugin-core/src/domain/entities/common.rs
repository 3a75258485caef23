use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative to the package root.
///
/// Invariant: never absolute and never escaping the root.
/// [`ArtifactPlan::validate`](super::ArtifactPlan::validate) checks both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Paths assembled by the planner from fixed prefixes.
    pub(crate) fn planned(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// True if any component is `..`.
    pub fn escapes_root(&self) -> bool {
        self.0
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Path with `/` separators regardless of platform.
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash_string())
    }
}
