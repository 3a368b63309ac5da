use super::{RawConfig, Rule, Scope, SeverityLevel};
use crate::rule::{MatchTarget, Predicate};

fn rule_with_patterns(include: Option<&str>, exclude: Option<&str>) -> Rule {
    Rule {
        id: "test-rule".to_string(),
        description: String::new(),
        recommendation: String::new(),
        severity: SeverityLevel::Low,
        link: String::new(),
        include_paths: include.map(|p| regex::Regex::new(p).unwrap()),
        exclude_paths: exclude.map(|p| regex::Regex::new(p).unwrap()),
        scope: Scope::Line,
        predicate: Predicate::Contains {
            needle: "x".to_string(),
            target: MatchTarget::Text,
        },
    }
}

#[test]
fn severity_parsing() {
    assert_eq!(SeverityLevel::parse("low"), SeverityLevel::Low);
    assert_eq!(SeverityLevel::parse("medium"), SeverityLevel::Medium);
    assert_eq!(SeverityLevel::parse("high"), SeverityLevel::High);
    assert_eq!(SeverityLevel::parse("critical"), SeverityLevel::Unknown);
    assert_eq!(SeverityLevel::parse(""), SeverityLevel::Unknown);
}

#[test]
fn severity_ordering() {
    assert!(SeverityLevel::High > SeverityLevel::Medium);
    assert!(SeverityLevel::Medium > SeverityLevel::Low);
    assert!(SeverityLevel::Low > SeverityLevel::Unknown);
}

#[test]
fn rule_without_include_paths_never_applies() {
    let rule = rule_with_patterns(None, None);
    assert!(!rule.applies_to("example.py"));
}

#[test]
fn exclude_paths_take_precedence() {
    let rule = rule_with_patterns(Some(r".*\.py$"), Some("generated"));
    assert!(rule.applies_to("src/example.py"));
    assert!(!rule.applies_to("src/generated/example.py"));
}

#[test]
fn raw_config_parses_the_documented_shape() {
    let yaml = r#"
version: v1.0.0
includes:
  - path: ./shared.yaml
    hash: "sha256:abc123"
rules:
  - id: no-print
    description: Use logging instead of print
    recommendation: Replace print with a logger call
    severity: medium
    link: https://example.com/no-print
    include_paths: '.*\.py$'
    fn:
      type: builtin
      scope: line
      name: contains
      args: ["print("]
"#;
    let raw: RawConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(raw.version, "v1.0.0");
    assert_eq!(raw.includes.len(), 1);
    assert_eq!(raw.includes[0].path, "./shared.yaml");
    assert_eq!(raw.includes[0].hash.as_deref(), Some("sha256:abc123"));
    assert_eq!(raw.rules.len(), 1);
    assert_eq!(raw.rules[0].id, "no-print");
    assert_eq!(raw.rules[0].fn_decl.scope, Scope::Line);
    assert_eq!(raw.rules[0].fn_decl.name, "contains");
}

#[test]
fn raw_config_parses_wasm_metadata() {
    let yaml = r#"
version: v0.1.0
rules:
  - id: plugin-rule
    severity: high
    fn:
      type: wasm
      scope: file
      name: check
      body: https://example.com/rule.wasm
      metadata:
        sha256: deadbeef
"#;
    let raw: RawConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(
        raw.rules[0].fn_decl.metadata.sha256.as_deref(),
        Some("deadbeef")
    );
}

#[test]
fn unknown_scope_is_rejected_at_parse_time() {
    let yaml = r"
version: v1.0.0
rules:
  - id: bad
    severity: low
    fn:
      type: builtin
      scope: word
      name: contains
      args: [x]
";
    assert!(serde_yaml::from_str::<RawConfig>(yaml).is_err());
}

#[test]
fn unknown_backend_type_is_rejected_at_parse_time() {
    let yaml = r"
version: v1.0.0
rules:
  - id: bad
    severity: low
    fn:
      type: lua
      scope: line
      name: f
";
    assert!(serde_yaml::from_str::<RawConfig>(yaml).is_err());
}
