//! Generation options before and after resolution.

use serde::Serialize;

use crate::domain::value_objects::{LicenseKind, TestFramework};

/// Options as supplied by the caller. Every field is optional and free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub license: Option<String>,
    pub test_framework: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
}

impl RawOptions {
    pub fn with_license(mut self, token: impl Into<String>) -> Self {
        self.license = Some(token.into());
        self
    }

    pub fn with_test_framework(mut self, token: impl Into<String>) -> Self {
        self.test_framework = Some(token.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Fill unset or blank fields from `fallback`.
    pub fn or(self, fallback: RawOptions) -> Self {
        Self {
            license: present(self.license).or(fallback.license),
            test_framework: present(self.test_framework).or(fallback.test_framework),
            author: present(self.author).or(fallback.author),
            email: present(self.email).or(fallback.email),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Normalised options. Produced only by
/// [`OptionResolver`](crate::application::OptionResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    pub license: LicenseKind,
    pub test_framework: TestFramework,
    pub author: String,
    pub email: String,
    /// GitHub account used for homepage and source URLs.
    pub github_user: String,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            license: LicenseKind::default(),
            test_framework: TestFramework::default(),
            author: String::new(),
            email: String::new(),
            github_user: String::new(),
        }
    }
}
