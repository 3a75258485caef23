//! Implementation of the `new` command.
//!
//! Responsibility: turn CLI arguments into [`RawOptions`], call the core
//! generator, and display results. No naming or layout logic lives here.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use tbplugin_adapters::{GitConfigIdentity, LocalFilesystem};
use tbplugin_core::{
    application::PluginGenerator,
    domain::{ArtifactPlan, DerivedNames, PlanEntry, RawOptions, RenderContext, ResolvedOptions},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `new` command.
///
/// 1. Validate the plugin name
/// 2. Merge flags over config defaults
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Refuse an existing package directory unless `--force`
/// 5. Generate via `PluginGenerator`
/// 6. Print the completion message and next steps
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_project_name(&args.name)?;

    let options = raw_options(&args, &config);
    debug!(?options, "Raw options merged");

    let generator = PluginGenerator::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GitConfigIdentity::new()),
    );

    let project_path = args.output.join(&DerivedNames::derive(&args.name).package_name);
    let exists = generator.package_exists(&args.name, &args.output);

    if args.dry_run {
        let (plan, ctx) = generator.preview(&args.name, &options);
        if exists {
            output.warning(&format!("{} already exists", project_path.display()))?;
        }
        return show_plan(&plan, &ctx, &project_path, &output);
    }

    if exists && !args.force {
        return Err(CliError::ProjectExists { path: project_path });
    }

    info!(path = %project_path.display(), "Generation started");

    if output.format() == OutputFormat::Json {
        let summary = generator.generate(&args.name, &options, &args.output)?;
        output.json(&summary)?;
        return Ok(());
    }

    output.header(&format!("Creating '{}'...", project_path.display()))?;
    let summary = generator.generate(&args.name, &options, &args.output)?;

    output.success(&summary.completion_message())?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", project_path.display()))?;
        output.print("  bundle install")?;
        output.print("  bundle exec rake")?;
    }

    Ok(())
}

/// Flags win over config defaults; the identity provider fills what is
/// still missing later, inside the core.
fn raw_options(args: &NewArgs, config: &AppConfig) -> RawOptions {
    RawOptions {
        license: args.license.clone(),
        test_framework: args.test_framework.clone(),
        author: args.author.clone(),
        email: args.email.clone(),
    }
    .or(config.raw_defaults())
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: format!("'{bad}' is not allowed"),
        });
    }
    Ok(())
}

// ── Dry run ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DryRunReport<'a> {
    root: &'a Path,
    names: &'a DerivedNames,
    options: &'a ResolvedOptions,
    year: i32,
    entries: &'a [PlanEntry],
}

fn show_plan(
    plan: &ArtifactPlan,
    ctx: &RenderContext,
    project_path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.json(&DryRunReport {
            root: project_path,
            names: &ctx.names,
            options: &ctx.options,
            year: ctx.year,
            entries: plan.entries(),
        })?;
        return Ok(());
    }

    let opts = &ctx.options;
    out.header(&format!("Dry run: would create {}", project_path.display()))?;
    out.print(&format!("  Module:         {}", ctx.names.qualified_module()))?;
    out.print(&format!("  Mode class:     {}", ctx.names.qualified_mode_class()))?;
    out.print(&format!("  License:        {}", opts.license))?;
    out.print(&format!("  Test framework: {}", opts.test_framework))?;
    out.print(&format!("  Author:         {} <{}>", opts.author, opts.email))?;
    out.print("")?;

    for line in plan_lines(plan, project_path) {
        out.result(&line)?;
    }
    Ok(())
}

/// One line per planned entry; directories end in `/`.
fn plan_lines(plan: &ArtifactPlan, project_path: &Path) -> Vec<String> {
    let mut lines = vec![format!("{}/", slash(project_path))];
    lines.extend(plan.entries().iter().map(|entry| {
        let path = format!("{}/{}", slash(project_path), entry.path());
        match entry {
            PlanEntry::Directory { .. } => format!("{path}/"),
            PlanEntry::File(_) => path,
        }
    }));
    lines
}

fn slash(path: &Path) -> String {
    let mut s = path.display().to_string();
    if std::path::MAIN_SEPARATOR != '/' {
        s = s.replace(std::path::MAIN_SEPARATOR, "/");
    }
    s.trim_start_matches("./").to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;
    use std::path::PathBuf;

    fn args(name: &str) -> NewArgs {
        NewArgs {
            name: name.into(),
            license: None,
            test_framework: None,
            author: None,
            email: None,
            output: PathBuf::from("."),
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_project_name(""),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn path_like_names_are_invalid() {
        for name in ["../evil", "a/b", "a\\b", ".hidden", "my lang", "zoë"] {
            assert!(validate_project_name(name).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn valid_names_pass() {
        for name in ["my-lang", "foo_bar", "json5", "MyLang", "x"] {
            assert!(validate_project_name(name).is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn flags_override_config_defaults() {
        let config = AppConfig {
            defaults: Defaults {
                license: Some("mit".into()),
                test_framework: Some("rspec".into()),
                author: Some("Config Author".into()),
                email: None,
            },
            ..AppConfig::default()
        };
        let mut args = args("x");
        args.license = Some("gpl-3.0".into());

        let merged = raw_options(&args, &config);

        assert_eq!(merged.license.as_deref(), Some("gpl-3.0"));
        assert_eq!(merged.test_framework.as_deref(), Some("rspec"));
        assert_eq!(merged.author.as_deref(), Some("Config Author"));
        assert_eq!(merged.email, None);
    }

    #[test]
    fn plan_lines_mark_directories() {
        let names = DerivedNames::derive("my-lang");
        let plan = ArtifactPlan::plan(&names, &ResolvedOptions::default());
        let lines = plan_lines(&plan, &PathBuf::from("./textbringer-my-lang"));

        assert_eq!(lines[0], "textbringer-my-lang/");
        assert!(lines.contains(&"textbringer-my-lang/lib/textbringer/my-lang/".to_string()));
        assert!(lines.contains(&"textbringer-my-lang/LICENSE.txt".to_string()));
        assert_eq!(lines.len(), plan.entries().len() + 1);
    }
}
