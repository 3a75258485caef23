use tbplugin_core::application::ports::IdentityProvider;

/// Fixed identity, for tests and for runs that must not consult git.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
    pub github_user: Option<String>,
}

impl StaticIdentity {
    /// An identity with nothing known.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            github_user: None,
        }
    }

    pub fn with_github_user(mut self, user: impl Into<String>) -> Self {
        self.github_user = Some(user.into());
        self
    }
}

impl IdentityProvider for StaticIdentity {
    fn author_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn author_email(&self) -> Option<String> {
        self.email.clone()
    }

    fn github_user(&self) -> Option<String> {
        self.github_user.clone()
    }
}
