//! Option resolution: raw user input to [`ResolvedOptions`].

use tracing::{debug, instrument, warn};

use crate::application::ports::IdentityProvider;
use crate::domain::{
    options::{RawOptions, ResolvedOptions},
    value_objects::{LicenseKind, TestFramework},
};

/// Turns raw tokens into a closed set of choices.
///
/// Precedence per field: non-blank explicit value, then the identity
/// provider, then the empty string / default variant. Unknown license or framework tokens
/// fall back to the default with a warning.
pub struct OptionResolver;

impl OptionResolver {
    #[instrument(skip_all)]
    pub fn resolve(raw: &RawOptions, identity: &dyn IdentityProvider) -> ResolvedOptions {
        let (license, fell_back) = LicenseKind::from_token_or_default(raw.license.as_deref());
        if fell_back {
            warn!(
                token = raw.license.as_deref().unwrap_or_default(),
                fallback = %license,
                "Unknown license, using default"
            );
        }

        let (test_framework, fell_back) =
            TestFramework::from_token_or_default(raw.test_framework.as_deref());
        if fell_back {
            warn!(
                token = raw.test_framework.as_deref().unwrap_or_default(),
                fallback = %test_framework,
                "Unknown test framework, using default"
            );
        }

        let author = non_empty(raw.author.clone())
            .or_else(|| non_empty(identity.author_name()))
            .unwrap_or_default();
        let email = non_empty(raw.email.clone())
            .or_else(|| non_empty(identity.author_email()))
            .unwrap_or_default();
        let github_user =
            non_empty(identity.github_user()).unwrap_or_else(|| github_handle(&author));

        debug!(%license, %test_framework, %author, %email, %github_user, "Options resolved");

        ResolvedOptions {
            license,
            test_framework,
            author,
            email,
            github_user,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Best-effort GitHub handle from a display name: `Ada Lovelace` → `AdaLovelace`.
pub fn github_handle(author: &str) -> String {
    author
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}
