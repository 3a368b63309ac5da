use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "polylint")]
#[command(
    author,
    version,
    about = "Polylint: extensible generalized linter",
    long_about = "Lint any file tree against a YAML ruleset. Rules match on file paths, \
    whole files, or individual lines, and can be built-in matchers, embedded scripts, \
    or sandboxed WebAssembly plugins."
)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to the ruleset (default: .polylint.yaml in the current or home directory)
    #[arg(short, long, env = "POLYLINT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint files or directory trees against the configured ruleset
    Run(RunArgs),

    /// Validate the configured ruleset
    Validate,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Files or directories to lint
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
