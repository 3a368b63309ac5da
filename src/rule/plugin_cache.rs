//! Content-addressed on-disk cache for plugin modules.
//!
//! Modules are stored under `<home>/.local/cache/polylint/cache/<hex>`
//! where `<hex>` is the sha256 of the module bytes. Writes are idempotent
//! because the filename is the content hash, so concurrent processes may
//! race on `store` without locking.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PolylintError, Result};
use crate::integrity;

/// Shared plugin module cache. Outlives individual runs.
#[derive(Debug, Clone)]
pub struct PluginCache {
    root: PathBuf,
}

impl PluginCache {
    /// Cache rooted at an explicit directory.
    #[must_use]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Cache at the standard per-user location.
    ///
    /// Returns `None` when the home directory cannot be determined.
    #[must_use]
    pub fn default_location() -> Option<Self> {
        directories::BaseDirs::new().map(|dirs| {
            let root = dirs
                .home_dir()
                .join(".local")
                .join("cache")
                .join("polylint")
                .join("cache");
            Self { root }
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a cached module by its hex sha256, if present.
    #[must_use]
    pub fn lookup(&self, hash: &str) -> Option<Vec<u8>> {
        let path = self.root.join(hash);
        match fs::read(path) {
            Ok(bytes) => {
                debug!(hash, "plugin cache hit");
                Some(bytes)
            }
            Err(_) => None,
        }
    }

    /// Store module bytes under their content hash, creating intermediate
    /// directories as needed. Returns the hex sha256 key.
    ///
    /// # Errors
    /// Returns an error if the cache directory or file cannot be written.
    pub fn store(&self, bytes: &[u8]) -> Result<String> {
        let hash = integrity::hash_hex(bytes);
        fs::create_dir_all(&self.root).map_err(|source| PolylintError::FileAccess {
            path: self.root.clone(),
            source,
        })?;

        let path = self.root.join(&hash);
        fs::write(&path, bytes)
            .map_err(|source| PolylintError::FileAccess { path, source })?;
        debug!(hash = %hash, "plugin stored in cache");
        Ok(hash)
    }
}

#[cfg(test)]
#[path = "plugin_cache_tests.rs"]
mod tests;
