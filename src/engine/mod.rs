use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::rules::{FileContext, RuleRegistry};
use crate::suppress::{FileSuppressions, InlineSuppressions, resolve};
use crate::violation::Violation;

/// Outcome of linting one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Project-relative path, forward slashes.
    pub path: String,
    /// Unsuppressed violations, sorted by (line, rule).
    pub violations: Vec<Violation>,
    /// How many raw violations suppression removed.
    pub suppressed: usize,
    /// Set when the file could not be read; such a file carries zero
    /// violations and the run continues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,
}

impl FileReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty() && self.read_error.is_none()
    }
}

/// Aggregate statistics for one run. Built by folding per-file reports in
/// discovery order; never mutated after the run completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintStats {
    pub files_scanned: usize,
    pub files_passed: usize,
    pub files_errored: usize,
    pub total_violations: usize,
    pub total_suppressed: usize,
    pub rule_counts: IndexMap<String, usize>,
}

impl LintStats {
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut stats = Self::default();
        for report in reports {
            stats.files_scanned += 1;
            if report.passed() {
                stats.files_passed += 1;
            }
            if report.read_error.is_some() {
                stats.files_errored += 1;
            }
            stats.total_suppressed += report.suppressed;
            for v in &report.violations {
                stats.total_violations += 1;
                *stats.rule_counts.entry(v.rule.clone()).or_insert(0) += 1;
            }
        }
        stats.rule_counts.sort_keys();
        stats
    }
}

/// Everything the reporter needs: per-file reports plus the fold.
#[derive(Debug)]
pub struct RunReport {
    pub reports: Vec<FileReport>,
    pub stats: LintStats,
}

impl RunReport {
    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.stats.total_violations > 0
    }
}

/// Runs the applicable rule families over a file set and accumulates
/// statistics. The engine is the only stateful component per run; its
/// output is consumed by a reporter and then discarded.
pub struct LintEngine<'a> {
    registry: &'a RuleRegistry,
    file_suppressions: &'a FileSuppressions,
    family_filter: Option<String>,
}

impl<'a> LintEngine<'a> {
    #[must_use]
    pub const fn new(registry: &'a RuleRegistry, file_suppressions: &'a FileSuppressions) -> Self {
        Self {
            registry,
            file_suppressions,
            family_filter: None,
        }
    }

    /// Restrict the run to families whose name starts with `filter`.
    ///
    /// # Errors
    /// Returns `UnknownFamily` before any file is scanned if the prefix
    /// selects nothing.
    pub fn with_family_filter(mut self, filter: Option<String>) -> Result<Self> {
        if let Some(prefix) = &filter {
            self.registry.validate_filter(prefix)?;
        }
        self.family_filter = filter;
        Ok(self)
    }

    /// Lint already-loaded source. Pure: same input, same report.
    #[must_use]
    pub fn lint_source(&self, rel_path: &str, content: &str) -> FileReport {
        let ctx = FileContext::new(rel_path, content);
        let inline = InlineSuppressions::scan(&ctx.lines);

        let mut raw: Vec<Violation> = Vec::new();
        for family in self.registry.matching(self.family_filter.as_deref()) {
            for check in &family.checks {
                raw.extend(check.check(&ctx));
            }
        }

        let (mut violations, suppressed) = resolve(raw, &inline, self.file_suppressions);
        violations.sort_by(|a, b| (a.line, &a.rule).cmp(&(b.line, &b.rule)));

        FileReport {
            path: rel_path.to_string(),
            violations,
            suppressed,
            read_error: None,
        }
    }

    /// Lint one file on disk. Read failures become a report-level
    /// diagnostic, never an abort.
    #[must_use]
    pub fn lint_file(&self, path: &Path, root: &Path) -> FileReport {
        let rel_path = relative_display(path, root);

        match fs::read(path) {
            Ok(bytes) => {
                // Undecodable bytes degrade lossily rather than failing the
                // file; line addressing stays intact.
                let content = String::from_utf8_lossy(&bytes);
                self.lint_source(&rel_path, &content)
            }
            Err(e) => FileReport {
                path: rel_path,
                violations: Vec::new(),
                suppressed: 0,
                read_error: Some(e.to_string()),
            },
        }
    }

    /// Lint a file set. Per-file work fans out across the rayon pool; the
    /// collect preserves input order, so the stats fold and the report are
    /// deterministic for a given file list.
    #[must_use]
    pub fn run(&self, files: &[std::path::PathBuf], root: &Path) -> RunReport {
        let reports: Vec<FileReport> = files
            .par_iter()
            .map(|path| self.lint_file(path, root))
            .collect();

        let stats = LintStats::from_reports(&reports);
        RunReport { reports, stats }
    }
}

/// Display-friendly path relative to the project root, forward slashes.
fn relative_display(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
