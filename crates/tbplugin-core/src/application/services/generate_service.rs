//! Plugin generator - main application orchestrator.
//!
//! Coordinates the whole run:
//! 1. Resolve options
//! 2. Derive names
//! 3. Plan artifacts
//! 4. Render
//! 5. Emit to the filesystem

use std::path::Path;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, IdentityProvider},
        services::{Emitter, GenerationSummary, OptionResolver},
    },
    domain::{ArtifactPlan, DerivedNames, RawOptions, RenderContext, render_plan},
    error::{GeneratorError, GeneratorResult},
};

/// Main generation service.
pub struct PluginGenerator {
    filesystem: Box<dyn Filesystem>,
    identity: Box<dyn IdentityProvider>,
}

impl PluginGenerator {
    /// Create a new generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tbplugin_core::prelude::*;
    /// # fn adapters() -> (Box<dyn Filesystem>, Box<dyn IdentityProvider>) { unimplemented!() }
    ///
    /// let (filesystem, identity) = adapters();
    /// let generator = PluginGenerator::new(filesystem, identity);
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, identity: Box<dyn IdentityProvider>) -> Self {
        Self {
            filesystem,
            identity,
        }
    }

    /// Generate `textbringer-<raw_name>/` under `output_dir`.
    #[instrument(
        skip_all,
        fields(name = %raw_name, output_dir = %output_dir.as_ref().display())
    )]
    pub fn generate(
        &self,
        raw_name: &str,
        options: &RawOptions,
        output_dir: impl AsRef<Path>,
    ) -> GeneratorResult<GenerationSummary> {
        let (plan, ctx) = self.preview(raw_name, options);
        self.emit(&plan, &ctx, output_dir.as_ref())
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied year.
    pub fn generate_with_context(
        &self,
        raw_name: &str,
        options: &RawOptions,
        output_dir: impl AsRef<Path>,
        year: i32,
    ) -> GeneratorResult<GenerationSummary> {
        let (plan, ctx) = self.preview(raw_name, options);
        self.emit(&plan, &ctx.with_year(year), output_dir.as_ref())
    }

    /// Resolve, derive and plan without touching the filesystem.
    pub fn preview(&self, raw_name: &str, options: &RawOptions) -> (ArtifactPlan, RenderContext) {
        let resolved = OptionResolver::resolve(options, self.identity.as_ref());
        let names = DerivedNames::derive(raw_name);
        let plan = ArtifactPlan::plan(&names, &resolved);

        info!(
            package = %names.package_name,
            license = %resolved.license,
            test_framework = %resolved.test_framework,
            "Plan ready"
        );

        (plan, RenderContext::new(names, resolved))
    }

    /// True if `<output_dir>/textbringer-<raw_name>` is already present.
    pub fn package_exists(&self, raw_name: &str, output_dir: impl AsRef<Path>) -> bool {
        let root = output_dir
            .as_ref()
            .join(DerivedNames::derive(raw_name).package_name);
        self.filesystem.exists(&root)
    }

    fn emit(
        &self,
        plan: &ArtifactPlan,
        ctx: &RenderContext,
        output_dir: &Path,
    ) -> GeneratorResult<GenerationSummary> {
        plan.validate().map_err(GeneratorError::Domain)?;

        let package = render_plan(plan, ctx);
        package.validate().map_err(GeneratorError::Domain)?;

        let summary = Emitter::new(self.filesystem.as_ref()).emit(&package, output_dir)?;
        info!("{}", summary.completion_message());
        Ok(summary)
    }
}
