//! Application layer.
//!
//! This layer contains:
//! - **Services**: the generation pipeline (PluginGenerator, OptionResolver, Emitter)
//! - **Ports**: traits for the filesystem and the identity lookup
//! - **Errors**: failures at the edges of the pipeline
//!
//! All naming and layout rules live in `crate::domain`; this layer only
//! wires them to the outside world.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{Emitter, GenerationSummary, OptionResolver, PluginGenerator};

pub use ports::{Filesystem, IdentityProvider};

pub use error::ApplicationError;
