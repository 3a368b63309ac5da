//! Per-file scan results: suppressions, findings, and the report that
//! owns them.

use std::collections::HashMap;

use crate::config::{Rule, Scope};

/// A suppression extracted from an inline directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ignore {
    /// Rule id being suppressed.
    pub id: String,
    pub scope: Scope,
    /// 1-based line where the directive appeared.
    pub source_line_no: usize,
    /// The line the suppression targets; 0 for file and path scope.
    pub line_no: usize,
}

/// One recorded violation.
#[derive(Debug, Clone)]
pub struct Finding<'a> {
    pub path: String,
    /// The matched line, or the whole content for file/path scope.
    pub line: String,
    /// 0-based line index; -1 for file/path scope.
    pub line_index: i64,
    /// 1-based line number; 0 for file/path scope.
    pub line_no: usize,
    pub rule_id: String,
    pub rule: &'a Rule,
}

/// The result of scanning one file.
#[derive(Debug)]
pub struct FileReport<'a> {
    pub path: String,
    /// Suppressions accumulated during the line pass.
    pub ignores: Vec<Ignore>,
    /// The effective ruleset.
    pub rules: &'a [Rule],
    /// Findings in discovery order: all line findings, then file/path
    /// findings.
    pub findings: Vec<Finding<'a>>,
}

impl<'a> FileReport<'a> {
    pub(crate) fn new(path: String, rules: &'a [Rule]) -> Self {
        Self {
            path,
            ignores: Vec::new(),
            rules,
            findings: Vec::new(),
        }
    }

    /// The suppressions active for a given line.
    ///
    /// File-scope ignores apply everywhere; line-scope ignores apply to
    /// their target line; path-scope ignores share the line 0 key used by
    /// the file/path pass.
    #[must_use]
    pub fn active_ignores(&self, line_no: usize) -> HashMap<&str, &Ignore> {
        let mut active = HashMap::new();
        for ignore in &self.ignores {
            let applies = match ignore.scope {
                Scope::Line => ignore.line_no == line_no,
                Scope::File => true,
                Scope::Path => line_no == 0,
            };
            if applies {
                active.insert(ignore.id.as_str(), ignore);
            }
        }
        active
    }
}
