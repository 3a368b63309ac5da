//! Config loading: YAML parsing, version enforcement, rule compilation,
//! and transitive include resolution.
//!
//! The loader is strict: any parse, compile, fetch, or integrity failure
//! aborts the whole load. Includes are resolved depth-first and their
//! rules appended after the including document's own rules; a visited set
//! keyed by `(URI, hash)` rejects cycles and duplicate inclusion.

use indexmap::IndexSet;
use regex::Regex;
use semver::Version;
use tracing::warn;

use crate::error::{PolylintError, Result};
use crate::fetch::{Fetcher, HttpClient, ReqwestClient};
use crate::integrity;
use crate::rule::{PluginCache, RuleCompiler};

use super::model::{ConfigFile, RawConfig, RawRule, Rule, SeverityLevel};

/// Loads and compiles rulesets.
///
/// Owns the fetcher used for includes and plugin modules, and the shared
/// plugin cache. Pass an explicit `binary_version` to get a warning when a
/// config declares a newer version than the running binary.
pub struct ConfigLoader<C: HttpClient = ReqwestClient> {
    fetcher: Fetcher<C>,
    plugin_cache: PluginCache,
    binary_version: Option<Version>,
}

impl ConfigLoader<ReqwestClient> {
    #[must_use]
    pub fn new() -> Self {
        let plugin_cache = PluginCache::default_location()
            .unwrap_or_else(|| PluginCache::at(std::env::temp_dir().join("polylint-cache")));
        Self {
            fetcher: Fetcher::new(),
            plugin_cache,
            binary_version: None,
        }
    }
}

impl Default for ConfigLoader<ReqwestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> ConfigLoader<C> {
    /// Loader with an injected fetcher and plugin cache.
    #[must_use]
    pub const fn with_parts(fetcher: Fetcher<C>, plugin_cache: PluginCache) -> Self {
        Self {
            fetcher,
            plugin_cache,
            binary_version: None,
        }
    }

    #[must_use]
    pub fn with_binary_version(mut self, version: Version) -> Self {
        self.binary_version = Some(version);
        self
    }

    /// Load a ruleset from a YAML document.
    ///
    /// # Errors
    /// Returns an error for malformed YAML, a bad version, an unknown
    /// severity or builtin, a regex compilation failure, or any include
    /// or plugin resolution failure.
    pub fn load_str(&self, content: &str) -> Result<ConfigFile> {
        let mut visited = IndexSet::new();
        self.load_inner(content, &mut visited)
    }

    fn load_inner(&self, content: &str, visited: &mut IndexSet<String>) -> Result<ConfigFile> {
        let raw: RawConfig = serde_yaml::from_str(content)?;

        let version = parse_version(&raw.version)?;
        if let Some(binary) = &self.binary_version
            && version > *binary
        {
            warn!(
                config = %raw.version,
                binary = %binary,
                "config version is newer than binary version"
            );
        }

        let compiler = RuleCompiler::new(&self.fetcher, &self.plugin_cache);
        let mut rules = Vec::with_capacity(raw.rules.len());
        for rule in &raw.rules {
            rules.push(compile_rule(rule, &compiler)?);
        }

        for include in &raw.includes {
            let key = match &include.hash {
                Some(hash) => format!("{}#{hash}", include.path),
                None => include.path.clone(),
            };
            if !visited.insert(key.clone()) {
                let mut chain: Vec<String> = visited.iter().cloned().collect();
                chain.push(key);
                return Err(PolylintError::CircularInclude { chain });
            }

            let bytes = self.fetcher.fetch(&include.path)?;
            if let Some(hash) = &include.hash
                && !integrity::verify(hash, &bytes)
            {
                return Err(PolylintError::IncludeHashMismatch {
                    uri: include.path.clone(),
                    expected: hash.clone(),
                    actual: format!("sha256:{}", integrity::hash_hex(&bytes)),
                });
            }

            let text = String::from_utf8_lossy(&bytes);
            let included = self.load_inner(&text, visited)?;
            rules.extend(included.rules);
        }

        Ok(ConfigFile {
            version: raw.version,
            rules,
        })
    }
}

/// Versions must carry a leading `v` and parse as semver.
fn parse_version(version: &str) -> Result<Version> {
    let Some(rest) = version.strip_prefix('v') else {
        return Err(PolylintError::InvalidVersion {
            version: version.to_string(),
            reason: "must start with 'v'".to_string(),
        });
    };
    Version::parse(rest).map_err(|e| PolylintError::InvalidVersion {
        version: version.to_string(),
        reason: e.to_string(),
    })
}

fn compile_rule<C: HttpClient>(raw: &RawRule, compiler: &RuleCompiler<'_, C>) -> Result<Rule> {
    let severity = SeverityLevel::parse(&raw.severity);
    if severity == SeverityLevel::Unknown {
        return Err(PolylintError::UnknownSeverity(raw.severity.clone()));
    }

    Ok(Rule {
        id: raw.id.clone(),
        description: raw.description.clone(),
        recommendation: raw.recommendation.clone(),
        severity,
        link: raw.link.clone(),
        include_paths: compile_pattern(raw.include_paths.as_deref())?,
        exclude_paths: compile_pattern(raw.exclude_paths.as_deref())?,
        scope: raw.fn_decl.scope,
        predicate: compiler.compile(&raw.fn_decl)?,
    })
}

fn compile_pattern(pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|source| PolylintError::InvalidPattern {
                pattern: p.to_string(),
                source,
            })
        })
        .transpose()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
