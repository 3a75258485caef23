//! The artifact planner.
//!
//! An [`ArtifactPlan`] is the complete, ordered list of directories and files
//! a generation run will produce, each file tagged with the [`ArtifactKind`]
//! whose renderer supplies its content. It is a function of the derived names
//! and the resolved test framework / license only.

use std::collections::HashSet;
use std::path::{Component, Path};

use serde::Serialize;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    names::{DerivedNames, HOST_PREFIX},
    options::ResolvedOptions,
    value_objects::{LicenseKind, TestFramework},
};

/// Which renderer produces a planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "variant", rename_all = "kebab-case")]
pub enum ArtifactKind {
    Manifest,
    Gemfile,
    Rakefile,
    GitIgnore,
    VersionModule,
    LibraryModule,
    PluginEntry,
    TestHelper(TestFramework),
    TestFile(TestFramework),
    /// `.rspec` options file, rspec only.
    RspecOptions,
    Readme,
    License(LicenseKind),
}

/// One planned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedArtifact {
    pub path: RelativePath,
    pub kind: ArtifactKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlanEntry {
    Directory { path: RelativePath },
    File(PlannedArtifact),
}

impl PlanEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::Directory { path } => path,
            Self::File(artifact) => &artifact.path,
        }
    }
}

/// Ordered set of artifacts for one generation run.
///
/// Paths are relative to `root`, which is itself relative to the output
/// directory chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPlan {
    pub(crate) root: String,
    pub(crate) entries: Vec<PlanEntry>,
}

impl ArtifactPlan {
    /// Build the plan for a package.
    ///
    /// Deterministic: the same names and options always give the same
    /// entries in the same order. Directories come first so that every
    /// file's parent is created before it is written.
    pub fn plan(names: &DerivedNames, options: &ResolvedOptions) -> Self {
        let fw = options.test_framework;
        let lib_dir = format!("lib/{HOST_PREFIX}");
        let test_dir = fw.directory();

        let mut entries = vec![
            dir(format!("{lib_dir}/{}", names.raw)),
            dir(test_dir),
            dir(".github/workflows"),
        ];

        entries.extend([
            file(
                format!("{}.gemspec", names.package_name),
                ArtifactKind::Manifest,
            ),
            file("Gemfile", ArtifactKind::Gemfile),
            file("Rakefile", ArtifactKind::Rakefile),
            file(".gitignore", ArtifactKind::GitIgnore),
            file(
                format!("{lib_dir}/{}/version.rb", names.raw),
                ArtifactKind::VersionModule,
            ),
            file(
                format!("{lib_dir}/{}.rb", names.raw),
                ArtifactKind::LibraryModule,
            ),
            file(
                format!("lib/{HOST_PREFIX}_plugin.rb"),
                ArtifactKind::PluginEntry,
            ),
            file(
                format!("{test_dir}/{}.rb", fw.helper_stem()),
                ArtifactKind::TestHelper(fw),
            ),
            file(
                format!(
                    "{test_dir}/{HOST_PREFIX}_{}{}.rb",
                    names.snake_name,
                    fw.file_suffix()
                ),
                ArtifactKind::TestFile(fw),
            ),
        ]);

        if fw == TestFramework::Rspec {
            entries.push(file(".rspec", ArtifactKind::RspecOptions));
        }

        entries.extend([
            file("README.md", ArtifactKind::Readme),
            file("LICENSE.txt", ArtifactKind::License(options.license)),
        ]);

        Self {
            root: names.package_name.clone(),
            entries,
        }
    }

    /// Package root directory name (`textbringer-my-lang`).
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedArtifact> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File(f) => Some(f),
            PlanEntry::Directory { .. } => None,
        })
    }

    /// Planned path of the first artifact of `kind`, if any.
    pub fn path_of(&self, kind: ArtifactKind) -> Option<&RelativePath> {
        self.files().find(|f| f.kind == kind).map(|f| &f.path)
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    /// Check the plan invariants.
    ///
    /// - at least one file
    /// - the root is a single plain directory name
    /// - every path is relative and stays under the root
    /// - no two entries share a path
    /// - exactly one test helper, one test file and one license
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.file_count() == 0 {
            return Err(DomainError::InvalidPlan("plan contains no files".into()));
        }

        let mut root_components = Path::new(&self.root).components();
        match (root_components.next(), root_components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(DomainError::InvalidPlan(format!(
                    "package root '{}' is not a plain directory name",
                    self.root
                )));
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();
            let path_str = path.to_string();

            if path.as_path().is_absolute() || path.as_path().has_root() || path.escapes_root() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        let count = |pred: fn(&ArtifactKind) -> bool| self.files().filter(|f| pred(&f.kind)).count();

        for (label, n) in [
            (
                "test helper",
                count(|k| matches!(k, ArtifactKind::TestHelper(_))),
            ),
            ("test file", count(|k| matches!(k, ArtifactKind::TestFile(_)))),
            ("license", count(|k| matches!(k, ArtifactKind::License(_)))),
        ] {
            if n != 1 {
                return Err(DomainError::InvalidPlan(format!(
                    "expected exactly one {label}, found {n}"
                )));
            }
        }

        Ok(())
    }
}

fn dir(path: impl Into<String>) -> PlanEntry {
    PlanEntry::Directory {
        path: RelativePath::planned(path.into()),
    }
}

fn file(path: impl Into<String>, kind: ArtifactKind) -> PlanEntry {
    PlanEntry::File(PlannedArtifact {
        path: RelativePath::planned(path.into()),
        kind,
    })
}
