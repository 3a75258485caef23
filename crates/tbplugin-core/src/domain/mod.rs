//! Domain layer: names, options, the artifact plan and the renderers.
//!
//! Nothing in here touches the filesystem or the environment.

pub mod entities;
pub mod error;
pub mod names;
pub mod options;
pub mod render;
pub mod value_objects;

pub use entities::{
    ArtifactKind, ArtifactPlan, DirectoryToCreate, FileToWrite, FsEntry, PlanEntry,
    PlannedArtifact, RelativePath, RenderedPackage,
};
pub use error::DomainError;
pub use names::DerivedNames;
pub use options::{RawOptions, ResolvedOptions};
pub use render::{RenderContext, render_artifact, render_plan};
pub use value_objects::{
    DEFAULT_LICENSE, DEFAULT_TEST_FRAMEWORK, LicenseKind, TestFramework, UnknownToken,
};
