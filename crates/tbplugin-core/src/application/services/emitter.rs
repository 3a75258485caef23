//! Emitter: hands a rendered package to the [`Filesystem`] port.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{FsEntry, RenderedPackage},
    error::GeneratorResult,
};

/// What a successful emit produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// `<base>/<package>`
    pub root: PathBuf,
    pub package_name: String,
    pub files_written: Vec<PathBuf>,
    pub directories_created: Vec<PathBuf>,
}

impl GenerationSummary {
    /// `Created textbringer-my-lang/`
    pub fn completion_message(&self) -> String {
        format!("Created {}/", self.package_name)
    }

    pub fn file_count(&self) -> usize {
        self.files_written.len()
    }
}

pub struct Emitter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Emitter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Materialize `package` under `base`.
    ///
    /// Stops at the first failure. Whatever was written before it stays on
    /// disk.
    #[instrument(skip_all, fields(root = %package.root().display(), base = %base.display()))]
    pub fn emit(&self, package: &RenderedPackage, base: &Path) -> GeneratorResult<GenerationSummary> {
        let root = base.join(package.root());
        self.filesystem.create_dir_all(&root)?;

        let mut files_written = Vec::new();
        let mut directories_created = Vec::new();

        for entry in package.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                    debug!(path = %path.display(), "Created directory");
                    directories_created.push(path);
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), bytes = file.size(), "Wrote file");
                    files_written.push(path);
                }
            }
        }

        info!(
            files = files_written.len(),
            directories = directories_created.len(),
            "Package written"
        );

        Ok(GenerationSummary {
            root,
            package_name: package.root().display().to_string(),
            files_written,
            directories_created,
        })
    }
}
