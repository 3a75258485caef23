//! Textbringer Plugin Generator Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for generating
//! Textbringer plugin gems, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          tbplugin-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (PluginGenerator, OptionResolver,      │
//! │   Emitter)                              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, IdentityProvider)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   tbplugin-adapters (Infrastructure)    │
//! │ (LocalFilesystem, GitConfigIdentity...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (DerivedNames, ArtifactPlan, renderers) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tbplugin_core::prelude::*;
//!
//! let generator = PluginGenerator::new(filesystem, identity);
//! let summary = generator.generate("my-lang", &RawOptions::default(), ".")?;
//! println!("{}", summary.completion_message());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Emitter, GenerationSummary, OptionResolver, PluginGenerator,
        ports::{Filesystem, IdentityProvider},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactPlan, DerivedNames, LicenseKind, RawOptions, RenderContext,
        RenderedPackage, ResolvedOptions, TestFramework,
    };
    pub use crate::error::{GeneratorError, GeneratorResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
