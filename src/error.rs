use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolylintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid config version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Unknown severity level '{0}'")]
    UnknownSeverity(String),

    #[error("Unknown builtin matcher '{0}'")]
    UnknownBuiltin(String),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to fetch '{uri}': {reason}")]
    Fetch { uri: String, reason: String },

    #[error("Include hash mismatch for {uri}: expected {expected}, got {actual}")]
    IncludeHashMismatch {
        uri: String,
        expected: String,
        actual: String,
    },

    #[error("Circular include chain: {}", chain.join(" -> "))]
    CircularInclude { chain: Vec<String> },

    #[error("Duplicate rule id '{0}'")]
    DuplicateRuleId(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Script error in rule function '{name}': {reason}")]
    Script { name: String, reason: String },

    #[error("Plugin load error for '{uri}': {reason}")]
    PluginLoad { uri: String, reason: String },

    #[error("Rule function '{name}' failed: {reason}")]
    PredicateRuntime { name: String, reason: String },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PolylintError {
    /// Returns the error type as a short string identifier.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::YamlParse(_)
            | Self::InvalidVersion { .. }
            | Self::UnknownSeverity(_)
            | Self::UnknownBuiltin(_)
            | Self::InvalidPattern { .. } => "Config",
            Self::Fetch { .. } | Self::IncludeHashMismatch { .. } | Self::CircularInclude { .. } => {
                "Include"
            }
            Self::DuplicateRuleId(_) => "Validation",
            Self::FileAccess { .. } | Self::Io(_) => "IO",
            Self::Script { .. } => "Script",
            Self::PluginLoad { .. } => "Plugin",
            Self::PredicateRuntime { .. } => "Predicate",
            Self::JsonSerialize(_) => "JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, PolylintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
