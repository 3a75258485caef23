//! Content renderers.
//!
//! One module per artifact family. Every renderer is a pure function of a
//! [`RenderContext`] and never fails: a blank author or email renders as an
//! empty string.
//!
//! ```text
//! ArtifactPlan ──► render_plan ──► RenderedPackage
//!                     │
//!                     └─ render_artifact(kind, ctx)
//!                          ├─ manifest   (.gemspec)
//!                          ├─ gemfile
//!                          ├─ rakefile
//!                          ├─ gitignore
//!                          ├─ library    (version / main / plugin entry)
//!                          ├─ tests      (helper + test per framework)
//!                          ├─ readme
//!                          └─ license
//! ```

pub mod gemfile;
pub mod gitignore;
pub mod library;
pub mod license;
pub mod manifest;
pub mod rakefile;
pub mod readme;

use std::collections::HashMap;

use chrono::Datelike;
use tracing::{debug, instrument};

use crate::domain::{
    entities::{ArtifactKind, ArtifactPlan, PlanEntry, RenderedPackage},
    names::DerivedNames,
    options::ResolvedOptions,
};

/// Everything a renderer may read.
///
/// A **Value Object**: immutable after creation. The copyright year is taken
/// from the local clock once, in [`RenderContext::new`], so a run never
/// straddles two years.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub names: DerivedNames,
    pub options: ResolvedOptions,
    pub year: i32,
}

impl RenderContext {
    pub fn new(names: DerivedNames, options: ResolvedOptions) -> Self {
        Self {
            names,
            options,
            year: chrono::Local::now().year(),
        }
    }

    /// Pin the copyright year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Placeholder values for static text bodies.
    ///
    /// | Variable | Example |
    /// |----------|---------|
    /// | `YEAR` | "2026" |
    /// | `AUTHOR` | "Ada" |
    /// | `EMAIL` | "ada@example.com" |
    /// | `PACKAGE` | "textbringer-my-lang" |
    pub fn variables(&self) -> HashMap<&'static str, String> {
        HashMap::from([
            ("YEAR", self.year.to_string()),
            ("AUTHOR", self.options.author.clone()),
            ("EMAIL", self.options.email.clone()),
            ("PACKAGE", self.names.package_name.clone()),
        ])
    }

    /// Replace `{{VARIABLE}}` placeholders in a static body.
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - substituted values are not rescanned
    pub fn substitute(&self, body: &str) -> String {
        let vars = self.variables();
        let mut out = String::with_capacity(body.len());
        let mut rest = body;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => match vars.get(&after[..end]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[end + 2..];
                    }
                    None => {
                        out.push_str("{{");
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Render the content of a single artifact.
pub fn render_artifact(kind: ArtifactKind, ctx: &RenderContext) -> String {
    match kind {
        ArtifactKind::Manifest => manifest::render(ctx),
        ArtifactKind::Gemfile => gemfile::render(ctx),
        ArtifactKind::Rakefile => rakefile::render(ctx),
        ArtifactKind::GitIgnore => gitignore::render(ctx),
        ArtifactKind::VersionModule => library::render_version(ctx),
        ArtifactKind::LibraryModule => library::render_main(ctx),
        ArtifactKind::PluginEntry => library::render_plugin_entry(ctx),
        ArtifactKind::TestHelper(fw) => tests::render_helper(fw, ctx),
        ArtifactKind::TestFile(fw) => tests::render_test(fw, ctx),
        ArtifactKind::RspecOptions => tests::render_rspec_options(ctx),
        ArtifactKind::Readme => readme::render(ctx),
        ArtifactKind::License(kind) => license::render(kind, ctx),
    }
}

/// Render every file in the plan, preserving order.
#[instrument(skip_all, fields(root = %plan.root()))]
pub fn render_plan(plan: &ArtifactPlan, ctx: &RenderContext) -> RenderedPackage {
    let mut package = RenderedPackage::new(plan.root());

    for entry in plan.entries() {
        match entry {
            PlanEntry::Directory { path } => package.add_directory(path.as_path()),
            PlanEntry::File(artifact) => {
                let content = render_artifact(artifact.kind, ctx);
                debug!(path = %artifact.path, bytes = content.len(), "Rendered artifact");
                package.add_file(artifact.path.as_path(), content);
            }
        }
    }

    package
}

/// Ruby double-quoted string literal, as `String#inspect` would print it.
pub(crate) fn ruby_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
pub(crate) fn test_context(raw: &str, options: ResolvedOptions) -> RenderContext {
    RenderContext::new(DerivedNames::derive(raw), options).with_year(2026)
}
