// ============================================================================
// domain/error.rs - PLAN INVARIANT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Name derivation, option normalisation and rendering are total, so the
/// only domain failures are violated plan invariants. They are raised by
/// [`ArtifactPlan::validate`](crate::domain::ArtifactPlan::validate) and
/// [`RenderedPackage::validate`](crate::domain::RenderedPackage::validate).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid artifact plan: {0}")]
    InvalidPlan(String),

    #[error("Duplicate path in artifact plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Artifact '{path}' rendered empty")]
    EmptyArtifact { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicatePath { path } | Self::EmptyArtifact { path } => vec![
                format!("The generated layout is inconsistent at '{path}'"),
                "Please report this issue together with the plugin name you used".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Refusing to write outside the package root: {path}"),
                "Plugin names may only contain letters, digits, '-' and '_'".into(),
            ],
            Self::InvalidPlan(msg) => vec![format!("Details: {msg}")],
        }
    }
}
