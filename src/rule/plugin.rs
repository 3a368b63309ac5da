//! Sandboxed WebAssembly rule backend.
//!
//! Plugin modules are content-addressed: when the declaration carries a
//! `sha256` metadata entry the cache is consulted first, otherwise the
//! module is fetched from the declaration body (a URL or local path) and
//! stored under its content hash. Modules run with WASI capabilities only;
//! no host functions are exposed.
//!
//! ABI: the export named after the rule function receives
//! `[path, idx, text]` JSON-encoded and replies with `{"Value": <bool>}`
//! (lowercase `value` is accepted as an alias).

use std::cell::RefCell;

use extism::{Manifest, Plugin, Wasm};
use serde::Deserialize;
use tracing::warn;

use crate::config::RawFn;
use crate::error::{PolylintError, Result};
use crate::fetch::{Fetcher, HttpClient};
use crate::integrity;

use super::plugin_cache::PluginCache;

#[derive(Debug, Deserialize)]
struct PluginReply {
    #[serde(rename = "Value", alias = "value")]
    value: bool,
}

pub struct PluginRule {
    name: String,
    source_ref: String,
    plugin: RefCell<Plugin>,
}

impl PluginRule {
    /// Resolve the module bytes, instantiate the sandbox, and check that
    /// the named export exists.
    ///
    /// # Errors
    /// Returns an error if the module cannot be fetched or instantiated,
    /// or if the export is missing. A content hash mismatch is
    /// warning-only.
    pub fn load<C: HttpClient>(
        raw: &RawFn,
        fetcher: &Fetcher<C>,
        cache: &PluginCache,
    ) -> Result<Self> {
        let bytes = resolve_module(raw, fetcher, cache)?;

        let manifest = Manifest::new([Wasm::data(bytes)]);
        let plugin = Plugin::new(&manifest, [], true).map_err(|e| PolylintError::PluginLoad {
            uri: raw.body.clone(),
            reason: e.to_string(),
        })?;

        if !plugin.function_exists(&raw.name) {
            return Err(PolylintError::PluginLoad {
                uri: raw.body.clone(),
                reason: format!("module has no export named '{}'", raw.name),
            });
        }

        Ok(Self {
            name: raw.name.clone(),
            source_ref: raw.body.clone(),
            plugin: RefCell::new(plugin),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    /// Call the plugin export with `(path, idx, text)`.
    ///
    /// # Errors
    /// Returns an error if the call traps or the reply is not the
    /// expected shape.
    pub fn eval(&self, path: &str, idx: i64, text: &str) -> Result<bool> {
        let payload = serde_json::to_string(&serde_json::json!([path, idx, text]))?;

        let mut plugin = self.plugin.borrow_mut();
        let reply: String = plugin.call(self.name.as_str(), payload.as_str()).map_err(|e| {
            PolylintError::PredicateRuntime {
                name: self.name.clone(),
                reason: e.to_string(),
            }
        })?;

        let reply: PluginReply =
            serde_json::from_str(&reply).map_err(|e| PolylintError::PredicateRuntime {
                name: self.name.clone(),
                reason: format!("invalid reply: {e}"),
            })?;
        Ok(reply.value)
    }
}

/// Cache lookup, fetch, integrity check, cache store.
fn resolve_module<C: HttpClient>(
    raw: &RawFn,
    fetcher: &Fetcher<C>,
    cache: &PluginCache,
) -> Result<Vec<u8>> {
    let expected = raw.metadata.sha256.as_deref();

    if let Some(hash) = expected
        && let Some(bytes) = cache.lookup(hash)
    {
        return Ok(bytes);
    }

    let bytes = fetcher.fetch(&raw.body)?;

    if let Some(hash) = expected
        && !integrity::verify(hash, &bytes)
    {
        warn!(
            source = %raw.body,
            expected = hash,
            actual = %integrity::hash_hex(&bytes),
            "plugin module does not match expected hash"
        );
    }

    cache.store(&bytes)?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod tests;
