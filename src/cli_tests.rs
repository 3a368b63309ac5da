use clap::Parser;

use super::{Cli, Commands};
use crate::output::OutputFormat;

#[test]
fn run_requires_at_least_one_path() {
    assert!(Cli::try_parse_from(["polylint", "run"]).is_err());
    assert!(Cli::try_parse_from(["polylint", "run", "src"]).is_ok());
}

#[test]
fn run_collects_multiple_paths() {
    let cli = Cli::try_parse_from(["polylint", "run", "src", "docs", "README.md"]).unwrap();
    match &cli.command {
        Commands::Run(args) => assert_eq!(args.paths.len(), 3),
        Commands::Validate => panic!("expected run command"),
    }
}

#[test]
fn config_flag_is_global() {
    let cli = Cli::try_parse_from(["polylint", "run", "src", "--config", "rules.yaml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("rules.yaml")));

    let cli = Cli::try_parse_from(["polylint", "--config", "rules.yaml", "validate"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("rules.yaml")));
}

#[test]
fn format_defaults_to_text() {
    let cli = Cli::try_parse_from(["polylint", "run", "src"]).unwrap();
    match &cli.command {
        Commands::Run(args) => assert_eq!(args.format, OutputFormat::Text),
        Commands::Validate => panic!("expected run command"),
    }
}

#[test]
fn format_accepts_json() {
    let cli = Cli::try_parse_from(["polylint", "run", "src", "--format", "json"]).unwrap();
    match &cli.command {
        Commands::Run(args) => assert_eq!(args.format, OutputFormat::Json),
        Commands::Validate => panic!("expected run command"),
    }
}

#[test]
fn validate_takes_no_positional_arguments() {
    assert!(Cli::try_parse_from(["polylint", "validate"]).is_ok());
    assert!(Cli::try_parse_from(["polylint", "validate", "extra"]).is_err());
}

#[test]
fn verbosity_flags_accumulate() {
    let cli = Cli::try_parse_from(["polylint", "-vv", "validate"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(!cli.quiet);
}
