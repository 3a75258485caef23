//! Identity from the user's git configuration.

use std::ffi::OsString;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use tbplugin_core::application::ports::IdentityProvider;

/// Reads `user.name`, `user.email` and `github.user` via `git config`.
#[derive(Debug, Clone)]
pub struct GitConfigIdentity {
    program: OsString,
}

#[derive(Debug, Error)]
enum GitConfigError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git config {key} exited with {status}")]
    Failed {
        key: &'static str,
        status: std::process::ExitStatus,
    },

    #[error("git config {key} is empty")]
    Empty { key: &'static str },
}

impl GitConfigIdentity {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a different `git` executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn lookup(&self, key: &'static str) -> Option<String> {
        match self.read(key) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "git identity unavailable");
                None
            }
        }
    }

    fn read(&self, key: &'static str) -> Result<String, GitConfigError> {
        let output = Command::new(&self.program)
            .args(["config", key])
            .output()?;

        if !output.status.success() {
            return Err(GitConfigError::Failed {
                key,
                status: output.status,
            });
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if value.is_empty() {
            return Err(GitConfigError::Empty { key });
        }
        Ok(value)
    }
}

impl Default for GitConfigIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for GitConfigIdentity {
    fn author_name(&self) -> Option<String> {
        self.lookup("user.name")
    }

    fn author_email(&self) -> Option<String> {
        self.lookup("user.email")
    }

    fn github_user(&self) -> Option<String> {
        self.lookup("github.user")
    }
}
