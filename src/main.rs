use clap::Parser;

use polylint::cli::{Cli, Commands};
use polylint::commands::{run_run, run_validate};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match &cli.command {
        Commands::Run(args) => run_run(args, &cli),
        Commands::Validate => run_validate(&cli),
    };

    std::process::exit(exit_code);
}

/// Warnings go to stderr by default; `-v` raises verbosity and `-q`
/// silences everything below errors. `RUST_LOG` overrides both.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
