//! Application services - orchestrate use cases.

pub mod emitter;
pub mod generate_service;
pub mod option_resolver;

pub use emitter::{Emitter, GenerationSummary};
pub use generate_service::PluginGenerator;
pub use option_resolver::OptionResolver;
