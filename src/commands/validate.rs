use crate::cli::Cli;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::load_config;

/// Entry point for `polylint validate`.
#[must_use]
pub fn run_validate(cli: &Cli) -> i32 {
    match load_config(cli) {
        Ok(_) => {
            println!("validation success");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}
