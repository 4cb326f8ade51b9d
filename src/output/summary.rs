use std::fmt::Write;

use crate::engine::RunReport;
use crate::error::Result;

use super::OutputFormatter;

/// Rule-id → count table instead of individual violations.
pub struct SummaryFormatter;

impl OutputFormatter for SummaryFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();
        let stats = &report.stats;

        if stats.rule_counts.is_empty() {
            output.push_str("All checks passed!\n");
        } else {
            let _ = writeln!(output, "\n{:<30} {:>6}", "Rule", "Count");
            let _ = writeln!(output, "{}", "-".repeat(38));
            for (rule, count) in &stats.rule_counts {
                let _ = writeln!(output, "  {rule:<28} {count:>6}");
            }
            let _ = writeln!(output, "{}", "-".repeat(38));
            let _ = writeln!(output, "  {:<28} {:>6}", "TOTAL", stats.total_violations);
        }

        let _ = writeln!(output, "\nFiles checked: {}", stats.files_scanned);
        if stats.total_suppressed > 0 {
            let _ = writeln!(output, "Suppressed: {}", stats.total_suppressed);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
