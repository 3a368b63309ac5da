//! Ruleset data model: the raw YAML shapes and the compiled forms.

use std::fmt;

use regex::Regex;
use serde::Deserialize;

use crate::rule::Predicate;

/// Rule severity, ordered from least to most severe.
///
/// `Unknown` is a parse sentinel: a config that yields it is rejected at
/// load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SeverityLevel {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
}

impl SeverityLevel {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The granularity at which a rule fires and what its predicate receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Fires once per file; the predicate sees the path only.
    Path,
    /// Fires once per file; the predicate sees the whole contents.
    File,
    /// Fires once per line; the predicate sees one line.
    Line,
}

impl Scope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::File => "file",
            Self::Line => "line",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule function backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FnType {
    Builtin,
    Js,
    Wasm,
}

/// Top-level raw configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    pub version: String,
    #[serde(default)]
    pub includes: Vec<IncludeRef>,
    #[serde(default)]
    pub rules: Vec<RawRule>,
}

/// A transitive configuration reference.
#[derive(Debug, Clone, Deserialize)]
pub struct IncludeRef {
    /// URI or filesystem path of the included config.
    pub path: String,
    /// Expected content hash, `algo:hex` or bare hex.
    #[serde(default)]
    pub hash: Option<String>,
}

/// One rule as declared in YAML, before compilation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
    pub severity: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub include_paths: Option<String>,
    #[serde(default)]
    pub exclude_paths: Option<String>,
    #[serde(rename = "fn")]
    pub fn_decl: RawFn,
}

/// The raw `fn` block of a rule declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFn {
    #[serde(rename = "type")]
    pub fn_type: FnType,
    pub scope: Scope,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub args: Vec<serde_yaml::Value>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub metadata: FnMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FnMetadata {
    /// Expected sha256 of a plugin module, hex-encoded.
    #[serde(default)]
    pub sha256: Option<String>,
}

/// A compiled rule. Immutable after loading; the predicate owns any
/// backing interpreter or plugin instance.
#[derive(Debug)]
pub struct Rule {
    pub id: String,
    pub description: String,
    pub recommendation: String,
    pub severity: SeverityLevel,
    /// Link to the documentation for this rule.
    pub link: String,
    pub include_paths: Option<Regex>,
    pub exclude_paths: Option<Regex>,
    pub scope: Scope,
    pub predicate: Predicate,
}

impl Rule {
    /// Path gating: excludes win, and a rule with no `include_paths`
    /// never applies.
    #[must_use]
    pub fn applies_to(&self, path: &str) -> bool {
        if self
            .exclude_paths
            .as_ref()
            .is_some_and(|re| re.is_match(path))
        {
            return false;
        }
        self.include_paths
            .as_ref()
            .is_some_and(|re| re.is_match(path))
    }
}

/// A fully loaded and compiled ruleset.
#[derive(Debug)]
pub struct ConfigFile {
    /// Semver version string with a leading `v`.
    pub version: String,
    /// Rules in declaration order, include rules appended depth-first.
    pub rules: Vec<Rule>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
