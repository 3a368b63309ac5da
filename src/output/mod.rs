mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::runner::RunOutcome;

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Renders an aggregated run outcome.
pub trait OutputFormatter {
    /// Format the outcome as a complete output document.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, outcome: &RunOutcome<'_>) -> Result<String>;
}
