//! Semantic validation of a loaded ruleset.

use std::collections::HashSet;

use crate::error::{PolylintError, Result};

use super::model::ConfigFile;

/// Check invariants that only hold across the fully flattened ruleset.
///
/// # Errors
/// Returns an error if two rules (including rules pulled in through
/// includes) share an id.
pub fn validate_config(config: &ConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for rule in &config.rules {
        if !seen.insert(rule.id.as_str()) {
            return Err(PolylintError::DuplicateRuleId(rule.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, Scope, SeverityLevel};
    use crate::rule::{MatchTarget, Predicate};

    fn rule(id: &str) -> crate::config::Rule {
        crate::config::Rule {
            id: id.to_string(),
            description: String::new(),
            recommendation: String::new(),
            severity: SeverityLevel::Low,
            link: String::new(),
            include_paths: None,
            exclude_paths: None,
            scope: Scope::Line,
            predicate: Predicate::Contains {
                needle: "x".to_string(),
                target: MatchTarget::Text,
            },
        }
    }

    #[test]
    fn unique_ids_pass() {
        let config = ConfigFile {
            version: "v1.0.0".to_string(),
            rules: vec![rule("a"), rule("b")],
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn duplicate_ids_are_fatal() {
        let config = ConfigFile {
            version: "v1.0.0".to_string(),
            rules: vec![rule("a"), rule("b"), rule("a")],
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, PolylintError::DuplicateRuleId(id) if id == "a"));
    }

    #[test]
    fn empty_ruleset_passes() {
        let config = ConfigFile {
            version: "v1.0.0".to_string(),
            rules: Vec::new(),
        };
        assert!(validate_config(&config).is_ok());
    }
}
