//! Compilation of raw `fn` declarations into executable predicates.
//!
//! Every backend compiles to the same shape: a predicate invoked as
//! `eval(path, idx, text)` where `text` is the path, the whole file, or a
//! single line depending on the rule's scope, and `idx` is the zero-based
//! line index (-1 for non-line scopes). Backend selection happens entirely
//! at load time; the scanner treats all predicates uniformly.

use std::fmt;

use regex::Regex;

use crate::config::{FnType, RawFn, Scope};
use crate::error::{PolylintError, Result};
use crate::fetch::{Fetcher, HttpClient};

use super::plugin::PluginRule;
use super::plugin_cache::PluginCache;
use super::script::ScriptRule;

/// Which input a builtin matcher inspects, fixed by the rule's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    /// Match against the file path (path scope).
    Path,
    /// Match against the scanned text (file and line scopes).
    Text,
}

impl MatchTarget {
    #[must_use]
    pub const fn for_scope(scope: Scope) -> Self {
        match scope {
            Scope::Path => Self::Path,
            Scope::File | Scope::Line => Self::Text,
        }
    }

    fn pick<'a>(self, path: &'a str, text: &'a str) -> &'a str {
        match self {
            Self::Path => path,
            Self::Text => text,
        }
    }
}

/// The compiled, executable form of a rule's matcher.
pub enum Predicate {
    Contains { needle: String, target: MatchTarget },
    Regexp { pattern: Regex, target: MatchTarget },
    Script(ScriptRule),
    Plugin(PluginRule),
}

impl Predicate {
    /// Evaluate the predicate against one scope-appropriate input.
    ///
    /// # Errors
    /// Returns an error when a script or plugin backend fails at runtime.
    /// Builtin matchers are infallible.
    pub fn eval(&self, path: &str, idx: i64, text: &str) -> Result<bool> {
        match self {
            Self::Contains { needle, target } => {
                Ok(target.pick(path, text).contains(needle.as_str()))
            }
            Self::Regexp { pattern, target } => Ok(pattern.is_match(target.pick(path, text))),
            Self::Script(script) => script.eval(path, idx, text),
            Self::Plugin(plugin) => plugin.eval(path, idx, text),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains { needle, target } => f
                .debug_struct("Contains")
                .field("needle", needle)
                .field("target", target)
                .finish(),
            Self::Regexp { pattern, target } => f
                .debug_struct("Regexp")
                .field("pattern", &pattern.as_str())
                .field("target", target)
                .finish(),
            Self::Script(script) => f
                .debug_struct("Script")
                .field("name", &script.name())
                .finish_non_exhaustive(),
            Self::Plugin(plugin) => f
                .debug_struct("Plugin")
                .field("name", &plugin.name())
                .field("source", &plugin.source_ref())
                .finish_non_exhaustive(),
        }
    }
}

/// Compiles raw `fn` declarations, resolving plugin modules through the
/// fetcher and the shared plugin cache.
pub struct RuleCompiler<'a, C: HttpClient> {
    fetcher: &'a Fetcher<C>,
    cache: &'a PluginCache,
}

impl<'a, C: HttpClient> RuleCompiler<'a, C> {
    #[must_use]
    pub const fn new(fetcher: &'a Fetcher<C>, cache: &'a PluginCache) -> Self {
        Self { fetcher, cache }
    }

    /// Compile one declaration into an executable predicate.
    ///
    /// # Errors
    /// Returns an error for unknown builtins, missing or mistyped
    /// arguments, script bodies that do not produce the named callable, or
    /// plugin modules that cannot be fetched or instantiated.
    pub fn compile(&self, raw: &RawFn) -> Result<Predicate> {
        match raw.fn_type {
            FnType::Builtin => Self::compile_builtin(raw),
            FnType::Js => ScriptRule::compile(raw).map(Predicate::Script),
            FnType::Wasm => PluginRule::load(raw, self.fetcher, self.cache).map(Predicate::Plugin),
        }
    }

    fn compile_builtin(raw: &RawFn) -> Result<Predicate> {
        let target = MatchTarget::for_scope(raw.scope);
        match raw.name.as_str() {
            "contains" => Ok(Predicate::Contains {
                needle: string_arg(raw, 0)?,
                target,
            }),
            "regexp" => {
                let pattern_raw = string_arg(raw, 0)?;
                let pattern =
                    Regex::new(&pattern_raw).map_err(|source| PolylintError::InvalidPattern {
                        pattern: pattern_raw,
                        source,
                    })?;
                Ok(Predicate::Regexp { pattern, target })
            }
            other => Err(PolylintError::UnknownBuiltin(other.to_string())),
        }
    }
}

fn string_arg(raw: &RawFn, idx: usize) -> Result<String> {
    raw.args
        .get(idx)
        .and_then(serde_yaml::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            PolylintError::Config(format!(
                "builtin '{}' requires a string argument at position {idx}",
                raw.name
            ))
        })
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
