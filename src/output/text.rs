use std::fmt::Write;

use crate::engine::RunReport;
use crate::error::Result;
use crate::violation::Severity;

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
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn severity_label(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        };
        self.colorize(severity.label(), color)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        for file in &report.reports {
            if let Some(err) = &file.read_error {
                let label = self.colorize("read error", ansi::RED);
                let _ = writeln!(output, "  {}: {label}: {err}", file.path);
            }
            for v in &file.violations {
                let _ = writeln!(
                    output,
                    "  {}:{}: {}: [{}] {}",
                    v.file,
                    v.line,
                    self.severity_label(v.severity),
                    v.rule,
                    v.message
                );
            }
        }

        let stats = &report.stats;
        if stats.total_violations > 0 {
            let _ = writeln!(
                output,
                "\n{} violation(s) in {} file(s), {} suppressed",
                stats.total_violations, stats.files_scanned, stats.total_suppressed
            );
        } else {
            let passed = self.colorize("All checks passed!", ansi::GREEN);
            let _ = writeln!(
                output,
                "{passed} ({} files, {} suppressed)",
                stats.files_scanned, stats.total_suppressed
            );
        }

        if stats.files_errored > 0 {
            let _ = writeln!(output, "{} file(s) could not be read", stats.files_errored);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
