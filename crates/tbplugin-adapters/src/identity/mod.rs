//! Identity adapters.

mod git_config;
mod static_identity;

pub use git_config::GitConfigIdentity;
pub use static_identity::StaticIdentity;
