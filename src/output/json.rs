use serde::Serialize;

use crate::error::Result;
use crate::runner::RunOutcome;
use crate::scanner::FileReport;

use super::OutputFormatter;

/// Serializable view of one finding.
#[derive(Debug, Serialize)]
struct FindingView<'a> {
    path: &'a str,
    line_no: usize,
    line_index: i64,
    /// The matched line; omitted for file/path findings where it would be
    /// the whole file.
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<&'a str>,
    rule_id: &'a str,
    severity: &'a str,
    scope: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    recommendation: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    link: &'a str,
}

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    path: &'a str,
    findings: Vec<FindingView<'a>>,
}

#[derive(Debug, Serialize)]
struct FailureView {
    path: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct OutcomeView<'a> {
    reports: Vec<ReportView<'a>>,
    total_findings: usize,
    failures: Vec<FailureView>,
}

fn report_view<'a>(report: &'a FileReport<'_>) -> ReportView<'a> {
    ReportView {
        path: &report.path,
        findings: report
            .findings
            .iter()
            .map(|finding| FindingView {
                path: &finding.path,
                line_no: finding.line_no,
                line_index: finding.line_index,
                line: (finding.line_index >= 0).then_some(finding.line.as_str()),
                rule_id: &finding.rule_id,
                severity: finding.rule.severity.as_str(),
                scope: finding.rule.scope.as_str(),
                description: &finding.rule.description,
                recommendation: &finding.rule.recommendation,
                link: &finding.rule.link,
            })
            .collect(),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &RunOutcome<'_>) -> Result<String> {
        let view = OutcomeView {
            reports: outcome.reports.iter().map(report_view).collect(),
            total_findings: outcome.total_findings(),
            failures: outcome
                .failures
                .iter()
                .map(|failure| FailureView {
                    path: failure.path.display().to_string(),
                    error: failure.error.to_string(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
