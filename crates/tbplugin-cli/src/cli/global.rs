//! Flags shared by `version`, `new` and `completions`.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v info, -vv every planned file, -vvv trace)"
    )]
    pub verbose: u8,

    /// Keeps the dry-run listing, JSON and errors; drops headers and next steps.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print results and errors"
    )]
    pub quiet: bool,

    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output (also set by NO_COLOR)"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "TOML file whose [defaults] table fills --license, --test-framework, --author and --email"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        visible_alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Print results as text or as JSON"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Messages and one path per line; colored on a terminal.
    #[default]
    Text,
    /// A single JSON document on stdout (dry-run report or generation summary).
    Json,
}
