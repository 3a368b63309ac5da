use std::fs;

use crate::EXIT_CONFIG_ERROR;
use crate::cli::{Cli, RunArgs};
use crate::error::{PolylintError, Result};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::runner::Runner;

use super::context::{color_mode, load_config};

/// Entry point for `polylint run`.
///
/// The exit code is the total finding count clamped to 255; loading
/// failures exit with the config error code.
#[must_use]
pub fn run_run(args: &RunArgs, cli: &Cli) -> i32 {
    match run_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(args: &RunArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;

    let runner = Runner::new(&config);
    let outcome = runner.run(&args.paths);

    let rendered = match args.format {
        OutputFormat::Text => TextFormatter::new(color_mode(cli.color)).format(&outcome)?,
        OutputFormat::Json => JsonFormatter.format(&outcome)?,
    };

    match &args.output {
        Some(path) => fs::write(path, rendered).map_err(|source| PolylintError::FileAccess {
            path: path.clone(),
            source,
        })?,
        None => print!("{rendered}"),
    }

    Ok(outcome.exit_code())
}
