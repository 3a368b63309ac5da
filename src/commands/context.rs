//! Shared command plumbing: config discovery and loading.

use std::path::{Path, PathBuf};

use semver::Version;

use crate::cli::{Cli, ColorChoice};
use crate::config::{ConfigFile, ConfigLoader, validate_config};
use crate::error::{PolylintError, Result};
use crate::output::ColorMode;

const LOCAL_CONFIG_NAME: &str = ".polylint.yaml";

/// Resolve the ruleset path: explicit flag/env first, then
/// `.polylint.yaml` in the current directory, then the home directory.
pub(crate) fn discover_config(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let local = std::env::current_dir()?.join(LOCAL_CONFIG_NAME);
    if local.exists() {
        return Ok(local);
    }

    if let Some(dirs) = directories::BaseDirs::new() {
        let home = dirs.home_dir().join(LOCAL_CONFIG_NAME);
        if home.exists() {
            return Ok(home);
        }
    }

    Err(PolylintError::Config(format!(
        "no {LOCAL_CONFIG_NAME} found; pass --config or set POLYLINT_CONFIG"
    )))
}

/// Load, compile, and validate the effective ruleset.
pub(crate) fn load_config(cli: &Cli) -> Result<ConfigFile> {
    let path = discover_config(cli.config.as_deref())?;
    let content =
        std::fs::read_to_string(&path).map_err(|source| PolylintError::FileAccess {
            path: path.clone(),
            source,
        })?;

    let loader = ConfigLoader::new().with_binary_version(binary_version());
    let config = loader.load_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

/// The running binary's version for config compatibility warnings.
fn binary_version() -> Version {
    Version::parse(env!("CARGO_PKG_VERSION")).unwrap_or_else(|_| Version::new(0, 0, 0))
}

pub(crate) const fn color_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}
