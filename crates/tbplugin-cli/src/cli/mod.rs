//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "textbringer-plugin-generator",
    bin_name = "textbringer-plugin-generator",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Textbringer plugin gems",
    long_about = "Creates a ready-to-build Ruby gem skeleton for a Textbringer \
                  editor plugin: gemspec, mode class, tests, README and license.",
    after_help = "EXAMPLES:\n\
        \x20 textbringer-plugin-generator new my-lang\n\
        \x20 textbringer-plugin-generator new foo_bar --test-framework rspec --license mit\n\
        \x20 textbringer-plugin-generator new x --author Ada --email ada@example.com --dry-run\n\
        \x20 textbringer-plugin-generator completions bash > ~/.local/share/bash-completion/completions/textbringer-plugin-generator",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the generator version.
    #[command(about = "Print the generator version")]
    Version,

    /// Create a new plugin gem.
    #[command(
        visible_alias = "n",
        about = "Create a new Textbringer plugin gem",
        after_help = "EXAMPLES:\n\
            \x20 textbringer-plugin-generator new my-lang\n\
            \x20 textbringer-plugin-generator new my-lang --output ~/src --license gpl-3.0\n\
            \x20 textbringer-plugin-generator new foo_bar --test_framework minitest"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 textbringer-plugin-generator completions bash > ~/.local/share/bash-completion/completions/textbringer-plugin-generator\n\
            \x20 textbringer-plugin-generator completions zsh  > ~/.zfunc/_textbringer-plugin-generator\n\
            \x20 textbringer-plugin-generator completions fish > ~/.config/fish/completions/textbringer-plugin-generator.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `new`.
///
/// `--license` and `--test-framework` take free text: unrecognised values
/// fall back to the default with a warning instead of failing.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Plugin name, e.g. `my-lang`. Creates `textbringer-<NAME>/`.
    #[arg(value_name = "NAME", help = "Plugin name (letters, digits, '-' and '_')")]
    pub name: String,

    #[arg(
        long = "license",
        value_name = "LICENSE",
        help = "License: wtfpl (default), mit, apache-2.0, bsd-3-clause, gpl-3.0"
    )]
    pub license: Option<String>,

    #[arg(
        long = "test-framework",
        alias = "test_framework",
        value_name = "FRAMEWORK",
        help = "Test framework: test-unit (default), minitest, rspec"
    )]
    pub test_framework: Option<String>,

    #[arg(
        long = "author",
        value_name = "NAME",
        help = "Author name (default: git config user.name)"
    )]
    pub author: Option<String>,

    #[arg(
        long = "email",
        value_name = "EMAIL",
        help = "Author email (default: git config user.email)"
    )]
    pub email: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to create the plugin in"
    )]
    pub output: PathBuf,

    /// Write into an existing package directory.
    #[arg(long = "force", help = "Overwrite files in an existing package directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tbplugin_core::domain::{LicenseKind, TestFramework};

    fn parse_new(args: &[&str]) -> NewArgs {
        let argv = ["textbringer-plugin-generator", "new"]
            .iter()
            .chain(args)
            .copied()
            .collect::<Vec<_>>();
        match Cli::parse_from(argv).command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn parse_new_with_defaults() {
        let args = parse_new(&["my-lang"]);
        assert_eq!(args.name, "my-lang");
        assert_eq!(args.license, None);
        assert_eq!(args.output, PathBuf::from("."));
        assert!(!args.force);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_framework_accepts_underscore_alias() {
        let args = parse_new(&["x", "--test_framework", "rspec"]);
        assert_eq!(args.test_framework.as_deref(), Some("rspec"));

        let args = parse_new(&["x", "--test-framework", "minitest"]);
        assert_eq!(args.test_framework.as_deref(), Some("minitest"));
    }

    #[test]
    fn unknown_license_token_is_accepted_by_parser() {
        let args = parse_new(&["x", "--license", "agpl"]);
        assert_eq!(args.license.as_deref(), Some("agpl"));
    }

    #[test]
    fn parse_version_command() {
        let cli = Cli::parse_from(["textbringer-plugin-generator", "version"]);
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn help_lists_every_known_token() {
        let mut cmd = Cli::command();
        let new = cmd.find_subcommand_mut("new").unwrap();
        let help = new.render_help().to_string();

        for kind in LicenseKind::ALL {
            assert!(help.contains(kind.as_str()), "missing {kind}");
        }
        for fw in TestFramework::ALL {
            assert!(help.contains(fw.as_str()), "missing {fw}");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result =
            Cli::try_parse_from(["textbringer-plugin-generator", "--quiet", "--verbose", "version"]);
        assert!(result.is_err());
    }
}
