#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the polylint binary.
#[macro_export]
macro_rules! polylint {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("polylint"));
        cmd.env_remove("POLYLINT_CONFIG");
        cmd
    }};
}

/// Temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a ruleset with one line-scope `contains` rule per entry.
    pub fn create_contains_config(&self, rules: &[(&str, &str)]) -> PathBuf {
        let mut yaml = String::from("version: v1.0.0\nrules:\n");
        for (id, needle) in rules {
            yaml.push_str(&format!(
                r#"  - id: {id}
    description: flags {needle}
    severity: low
    include_paths: '.*\.py$'
    fn:
      type: builtin
      scope: line
      name: contains
      args: ["{needle}"]
"#
            ));
        }
        self.create_file("rules.yaml", &yaml)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
