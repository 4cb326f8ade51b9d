use serde::Serialize;

use crate::engine::{FileReport, LintStats, RunReport};
use crate::error::Result;

use super::OutputFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileReport],
    stats: &'a LintStats,
}

/// Machine-readable rendering of the full run report.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let payload = JsonReport {
            files: &report.reports,
            stats: &report.stats,
        };
        let json = serde_json::to_string_pretty(&payload)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
