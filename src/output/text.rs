use std::fmt::Write;
use std::io::IsTerminal;

use crate::config::SeverityLevel;
use crate::error::Result;
use crate::runner::RunOutcome;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }

    fn severity_label(&self, severity: SeverityLevel) -> String {
        if !self.use_colors {
            return severity.to_string();
        }
        let color = match severity {
            SeverityLevel::High => ansi::RED,
            SeverityLevel::Medium => ansi::YELLOW,
            SeverityLevel::Low | SeverityLevel::Unknown => ansi::CYAN,
        };
        format!("{color}{severity}{}", ansi::RESET)
    }

    fn paint(&self, color: &'static str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &RunOutcome<'_>) -> Result<String> {
        let mut out = String::new();

        for report in &outcome.reports {
            if report.findings.is_empty() {
                continue;
            }
            let _ = writeln!(
                out,
                "\n{}: violations count {}",
                report.path,
                report.findings.len()
            );
            for (idx, finding) in report.findings.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{}: {}:{} [{}] {} {}",
                    idx + 1,
                    finding.path,
                    finding.line_no,
                    self.severity_label(finding.rule.severity),
                    finding.rule_id,
                    finding.rule.description
                );
            }
        }

        let total = outcome.total_findings();
        let summary = format!(
            "\n{} finding(s) in {} file(s)",
            total,
            outcome.reports.len()
        );
        if total == 0 {
            let _ = writeln!(out, "{}", self.paint(ansi::GREEN, &summary));
        } else {
            let _ = writeln!(out, "{}", self.paint(ansi::RED, &summary));
        }

        if !outcome.failures.is_empty() {
            let _ = writeln!(out, "{} file(s) failed to scan:", outcome.failures.len());
            for failure in &outcome.failures {
                let _ = writeln!(out, "  {}: {}", failure.path.display(), failure.error);
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
