//! Unified error handling for the generator core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for generator core operations.
#[derive(Debug, Error, Clone)]
pub enum GeneratorError {
    /// A plan invariant was violated (always a bug in the planner).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl GeneratorError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Plans are built by the generator itself, so a broken one is our fault.
            Self::Domain(_) => ErrorCategory::Internal,
            Self::Application(e) => e.category(),
        }
    }

    /// True when the failure came from the file sink.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Io { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Internal,
}

/// Convenient result type alias.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn io_failures_are_categorised_as_io() {
        let err: GeneratorError = ApplicationError::Io {
            path: PathBuf::from("textbringer-x/Gemfile"),
            operation: "write file",
            reason: "permission denied".into(),
        }
        .into();

        assert!(err.is_io());
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.to_string().contains("Gemfile"));
    }

    #[test]
    fn plan_violations_are_internal() {
        let err: GeneratorError = DomainError::DuplicatePath {
            path: "Gemfile".into(),
        }
        .into();

        assert!(!err.is_io());
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.suggestions().is_empty());
    }
}
