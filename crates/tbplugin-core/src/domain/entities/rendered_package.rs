use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Fully rendered package ready for materialization.
///
/// This is the output of rendering an [`ArtifactPlan`](super::ArtifactPlan).
/// It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct RenderedPackage {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl RenderedPackage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    /// No file is empty, no path is repeated, nothing is absolute.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidPlan("rendered package is empty".into()));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            let path_str = path.display().to_string();

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
            if let FsEntry::File(f) = entry {
                if f.is_empty() {
                    return Err(DomainError::EmptyArtifact { path: path_str });
                }
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    /// Content of the file at `path` (relative to the root).
    pub fn file(&self, path: &str) -> Option<&str> {
        let wanted = PathBuf::from(path);
        self.files()
            .find(|f| f.path == wanted)
            .map(|f| f.content.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_correctly() {
        let package = RenderedPackage::new("textbringer-x")
            .with_directory("lib")
            .with_file("lib/x.rb", "module X; end\n".into());

        assert_eq!(package.entries().len(), 2);
        assert_eq!(package.files().count(), 1);
        assert_eq!(package.file("lib/x.rb"), Some("module X; end\n"));
        assert!(package.validate().is_ok());
    }

    #[test]
    fn validates_duplicates() {
        let package = RenderedPackage::new("textbringer-x")
            .with_file("Gemfile", "a".into())
            .with_file("Gemfile", "b".into());

        assert!(matches!(
            package.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn validates_empty_files() {
        let package = RenderedPackage::new("textbringer-x").with_file("Gemfile", String::new());

        assert!(matches!(
            package.validate(),
            Err(DomainError::EmptyArtifact { .. })
        ));
    }

    #[test]
    fn validates_empty_package() {
        assert!(RenderedPackage::new("textbringer-x").validate().is_err());
    }
}
