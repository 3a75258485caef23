//! Domain value objects: LicenseKind, TestFramework.
//!
//! # Design
//!
//! These are pure `Copy` value types compared by value.
//! Each has two parsers:
//!
//! - `FromStr`: strict, errors on unknown tokens.
//! - `from_token_or_default`: permissive wrapper that falls back to the
//!   default and reports whether it did. Option resolution uses this one.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and its `ALL` entry here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the renderer arm in `domain::render`
//! 4. The planner picks it up automatically

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// License used when none (or an unknown one) is supplied.
pub const DEFAULT_LICENSE: LicenseKind = LicenseKind::Wtfpl;

/// Test framework used when none (or an unknown one) is supplied.
pub const DEFAULT_TEST_FRAMEWORK: TestFramework = TestFramework::TestUnit;

/// Error returned by the strict `FromStr` parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{token}' (expected one of: {expected})")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
    pub expected: String,
}

// ── LicenseKind ──────────────────────────────────────────────────────────────

/// License stamped into `LICENSE.txt`, the gemspec and the README.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseKind {
    Wtfpl,
    Mit,
    #[serde(rename = "apache-2.0")]
    Apache2,
    #[serde(rename = "bsd-3-clause")]
    Bsd3Clause,
    #[serde(rename = "gpl-3.0")]
    Gpl3,
}

impl LicenseKind {
    pub const ALL: [LicenseKind; 5] = [
        Self::Wtfpl,
        Self::Mit,
        Self::Apache2,
        Self::Bsd3Clause,
        Self::Gpl3,
    ];

    /// CLI token, e.g. `apache-2.0`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wtfpl => "wtfpl",
            Self::Mit => "mit",
            Self::Apache2 => "apache-2.0",
            Self::Bsd3Clause => "bsd-3-clause",
            Self::Gpl3 => "gpl-3.0",
        }
    }

    /// SPDX identifier written to `spec.license`.
    pub const fn spdx_id(&self) -> &'static str {
        match self {
            Self::Wtfpl => "WTFPL",
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Bsd3Clause => "BSD-3-Clause",
            Self::Gpl3 => "GPL-3.0",
        }
    }

    /// Name used in the README license section.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Wtfpl => "WTFPL",
            Self::Mit => "MIT License",
            Self::Apache2 => "Apache License 2.0",
            Self::Bsd3Clause => "BSD 3-Clause License",
            Self::Gpl3 => "GNU General Public License v3.0",
        }
    }

    pub const fn url(&self) -> &'static str {
        match self {
            Self::Wtfpl => "http://www.wtfpl.net/",
            Self::Mit => "https://opensource.org/licenses/MIT",
            Self::Apache2 => "https://www.apache.org/licenses/LICENSE-2.0",
            Self::Bsd3Clause => "https://opensource.org/licenses/BSD-3-Clause",
            Self::Gpl3 => "https://www.gnu.org/licenses/gpl-3.0.html",
        }
    }

    /// Map a token to a license, falling back to [`DEFAULT_LICENSE`].
    ///
    /// Returns the kind and whether the fallback was taken.
    pub fn from_token_or_default(token: Option<&str>) -> (Self, bool) {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            None => (DEFAULT_LICENSE, false),
            Some(t) => match t.parse() {
                Ok(kind) => (kind, false),
                Err(_) => (DEFAULT_LICENSE, true),
            },
        }
    }
}

impl Default for LicenseKind {
    fn default() -> Self {
        DEFAULT_LICENSE
    }
}

impl fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseKind {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| UnknownToken {
                kind: "license",
                token: s.to_string(),
                expected: tokens(Self::ALL.iter().map(Self::as_str)),
            })
    }
}

// ── TestFramework ────────────────────────────────────────────────────────────

/// Test framework the generated gem is wired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestFramework {
    TestUnit,
    Minitest,
    Rspec,
}

impl TestFramework {
    pub const ALL: [TestFramework; 3] = [Self::TestUnit, Self::Minitest, Self::Rspec];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TestUnit => "test-unit",
            Self::Minitest => "minitest",
            Self::Rspec => "rspec",
        }
    }

    /// Gem that provides the framework.
    pub const fn gem(&self) -> &'static str {
        match self {
            Self::TestUnit => "test-unit",
            Self::Minitest => "minitest",
            Self::Rspec => "rspec",
        }
    }

    /// Directory holding the helper and test files.
    pub const fn directory(&self) -> &'static str {
        match self {
            Self::TestUnit | Self::Minitest => "test",
            Self::Rspec => "spec",
        }
    }

    /// Helper file stem (`test_helper` / `spec_helper`).
    pub const fn helper_stem(&self) -> &'static str {
        match self {
            Self::TestUnit | Self::Minitest => "test_helper",
            Self::Rspec => "spec_helper",
        }
    }

    /// Suffix of test file stems (`_test` / `_spec`).
    pub const fn file_suffix(&self) -> &'static str {
        match self {
            Self::TestUnit | Self::Minitest => "_test",
            Self::Rspec => "_spec",
        }
    }

    /// Rake task that runs the suite.
    pub const fn rake_task(&self) -> &'static str {
        match self {
            Self::TestUnit | Self::Minitest => "test",
            Self::Rspec => "spec",
        }
    }

    /// Map a token to a framework, falling back to [`DEFAULT_TEST_FRAMEWORK`].
    ///
    /// Returns the framework and whether the fallback was taken.
    pub fn from_token_or_default(token: Option<&str>) -> (Self, bool) {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            None => (DEFAULT_TEST_FRAMEWORK, false),
            Some(t) => match t.parse() {
                Ok(fw) => (fw, false),
                Err(_) => (DEFAULT_TEST_FRAMEWORK, true),
            },
        }
    }
}

impl Default for TestFramework {
    fn default() -> Self {
        DEFAULT_TEST_FRAMEWORK
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestFramework {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|fw| fw.as_str() == lower)
            .ok_or_else(|| UnknownToken {
                kind: "test framework",
                token: s.to_string(),
                expected: tokens(Self::ALL.iter().map(Self::as_str)),
            })
    }
}

fn tokens<'a>(iter: impl Iterator<Item = &'a str>) -> String {
    iter.collect::<Vec<_>>().join(", ")
}
