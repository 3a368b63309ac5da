//! Per-file rule evaluation.
//!
//! Scanning is two passes over one file. Pass 1 walks lines in order,
//! collecting suppression directives and evaluating line-scope rules.
//! Pass 2 evaluates file- and path-scope rules once, after every
//! directive in the file has been seen. All line findings therefore
//! precede all file/path findings in the report.

mod directive;
mod report;

pub use report::{FileReport, Finding, Ignore};

use crate::config::{ConfigFile, Scope};
use crate::error::Result;

use directive::{DIRECTIVE_TOKEN, extract_ignores};

/// Evaluate every rule in `config` against one file.
///
/// # Errors
/// Returns an error when a script or plugin predicate fails at runtime;
/// the file's scan is abandoned.
pub fn scan_file<'a>(content: &str, path: &str, config: &'a ConfigFile) -> Result<FileReport<'a>> {
    let mut report = FileReport::new(path.to_string(), &config.rules);

    for (idx, line) in content.split('\n').enumerate() {
        scan_line(line, idx, &mut report)?;
    }

    scan_whole_file(content, &mut report)?;

    Ok(report)
}

#[allow(clippy::cast_possible_wrap)]
fn scan_line<'a>(line: &str, idx: usize, report: &mut FileReport<'a>) -> Result<()> {
    let line_no = idx + 1;
    report.ignores.extend(extract_ignores(line, line_no));

    // Directive lines are exempt from rule evaluation, which is why
    // end-of-line suppressions on code lines are not supported.
    if line.contains(DIRECTIVE_TOKEN) {
        return Ok(());
    }

    let ignores = report.active_ignores(line_no);
    let rules = report.rules;
    let mut findings = Vec::new();
    for rule in rules {
        if rule.scope != Scope::Line {
            continue;
        }
        if !rule.applies_to(&report.path) || ignores.contains_key(rule.id.as_str()) {
            continue;
        }
        if rule.predicate.eval(&report.path, idx as i64, line)? {
            findings.push(Finding {
                path: report.path.clone(),
                line: line.to_string(),
                line_index: idx as i64,
                line_no,
                rule_id: rule.id.clone(),
                rule,
            });
        }
    }
    report.findings.extend(findings);
    Ok(())
}

/// Pass 2: file- and path-scope rules, gated by the line 0 ignore set.
fn scan_whole_file<'a>(content: &str, report: &mut FileReport<'a>) -> Result<()> {
    let ignores = report.active_ignores(0);
    let rules = report.rules;
    let mut findings = Vec::new();
    for rule in rules {
        if !matches!(rule.scope, Scope::File | Scope::Path) {
            continue;
        }
        if !rule.applies_to(&report.path) || ignores.contains_key(rule.id.as_str()) {
            continue;
        }
        if rule.predicate.eval(&report.path, -1, content)? {
            findings.push(Finding {
                path: report.path.clone(),
                line: content.to_string(),
                line_index: -1,
                line_no: 0,
                rule_id: rule.id.clone(),
                rule,
            });
        }
    }
    report.findings.extend(findings);
    Ok(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
