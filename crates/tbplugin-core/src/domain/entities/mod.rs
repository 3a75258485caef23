pub mod artifact_plan;
pub mod common;
pub mod rendered_package;

pub use crate::domain::DomainError;
pub use artifact_plan::{ArtifactKind, ArtifactPlan, PlanEntry, PlannedArtifact};
pub use common::RelativePath;
pub use rendered_package::{DirectoryToCreate, FileToWrite, FsEntry, RenderedPackage};
