mod json;
mod summary;
mod text;

pub use json::JsonFormatter;
pub use summary::SummaryFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::engine::RunReport;
use crate::error::Result;

/// Trait for rendering a run report.
///
/// The engine exposes `Violation` + `LintStats` only; any renderer can be
/// swapped in without touching the engine.
pub trait OutputFormatter {
    /// Format the run report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &RunReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
