//! Directory walking and report aggregation.
//!
//! The walk is depth-first with entries sorted by file name so runs are
//! deterministic. Per-file failures (unreadable files, predicate runtime
//! errors) are logged and accumulated; they never abort the walk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::config::ConfigFile;
use crate::error::PolylintError;
use crate::scanner::{self, FileReport};

/// Findings beyond this count no longer change the exit code.
pub const MAX_EXIT_CODE: i32 = 255;

/// A per-file failure that did not abort the walk.
#[derive(Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: PolylintError,
}

/// Aggregated result of one run.
#[derive(Debug, Default)]
pub struct RunOutcome<'a> {
    pub reports: Vec<FileReport<'a>>,
    pub failures: Vec<ScanFailure>,
}

impl RunOutcome<'_> {
    #[must_use]
    pub fn total_findings(&self) -> usize {
        self.reports.iter().map(|r| r.findings.len()).sum()
    }

    /// Process exit code: the total finding count clamped to 255.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.total_findings())
            .unwrap_or(MAX_EXIT_CODE)
            .min(MAX_EXIT_CODE)
    }
}

/// Drives the scanner over one or more root paths.
pub struct Runner<'a> {
    config: &'a ConfigFile,
}

impl<'a> Runner<'a> {
    #[must_use]
    pub const fn new(config: &'a ConfigFile) -> Self {
        Self { config }
    }

    /// Walk each root depth-first and scan every regular file.
    #[must_use]
    pub fn run(&self, roots: &[PathBuf]) -> RunOutcome<'a> {
        let mut outcome = RunOutcome::default();
        for root in roots {
            self.run_root(root, &mut outcome);
        }
        outcome
    }

    fn run_root(&self, root: &Path, outcome: &mut RunOutcome<'a>) {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "error accessing path");
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("walk error"));
                    outcome.failures.push(ScanFailure {
                        path: path.clone(),
                        error: PolylintError::FileAccess { path, source },
                    });
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                self.scan_entry(entry.path(), outcome);
            }
        }
    }

    fn scan_entry(&self, path: &Path, outcome: &mut RunOutcome<'a>) {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) => {
                warn!(path = %path.display(), error = %source, "failed to read file");
                outcome.failures.push(ScanFailure {
                    path: path.to_path_buf(),
                    error: PolylintError::FileAccess {
                        path: path.to_path_buf(),
                        source,
                    },
                });
                return;
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        match scanner::scan_file(&content, &path.to_string_lossy(), self.config) {
            Ok(report) => outcome.reports.push(report),
            Err(error) => {
                warn!(path = %path.display(), error = %error, "scan aborted for file");
                outcome.failures.push(ScanFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
