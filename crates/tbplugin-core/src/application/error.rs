//! Application layer errors.
//!
//! These are failures of the outside world, not of the naming or planning
//! rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A filesystem operation failed.
    #[error("Failed to {operation} {}: {reason}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// The in-memory filesystem lock was poisoned.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } => ErrorCategory::Io,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_message_names_operation_and_path() {
        let err = ApplicationError::Io {
            path: PathBuf::from("textbringer-x/Gemfile"),
            operation: "write file",
            reason: "disk full".into(),
        };

        assert_eq!(
            err.to_string(),
            "Failed to write file textbringer-x/Gemfile: disk full"
        );
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.suggestions()[0].contains("textbringer-x/Gemfile"));
    }
}
