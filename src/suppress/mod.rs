use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{Result, RtLintError};
use crate::violation::Violation;

/// Inline marker token: `// rt-lint: suppress <rule-or-family>`.
pub const INLINE_MARKER: &str = "rt-lint: suppress";

/// Per-file map of line number → suppressed rule tokens.
///
/// A marker on line N covers line N and line N+1 only. That narrow "this
/// and next line" window is deliberate; it is not a range or block scope.
#[derive(Debug, Default)]
pub struct InlineSuppressions {
    by_line: HashMap<usize, HashSet<String>>,
}

impl InlineSuppressions {
    /// Scan every line for the suppression marker.
    ///
    /// The marker counts only when a line-comment prefix (`//` or `#`)
    /// appears before it, regardless of comment style.
    #[must_use]
    pub fn scan(lines: &[&str]) -> Self {
        let mut by_line: HashMap<usize, HashSet<String>> = HashMap::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(pos) = line.find(INLINE_MARKER) else {
                continue;
            };
            let before = &line[..pos];
            if !before.contains("//") && !before.contains('#') {
                continue;
            }

            // Everything up to the first bare word break is the rule list;
            // trailing prose on the marker line is ignored.
            let rest = line[pos + INLINE_MARKER.len()..].trim_start();
            let tokens: Vec<String> = rest
                .split(',')
                .filter_map(|part| part.split_whitespace().next())
                .map(ToString::to_string)
                .collect();

            if tokens.is_empty() {
                continue;
            }

            let line_num = i + 1;
            for target in [line_num, line_num + 1] {
                by_line.entry(target).or_default().extend(tokens.iter().cloned());
            }
        }

        Self { by_line }
    }

    #[must_use]
    pub fn tokens_at(&self, line: usize) -> Option<&HashSet<String>> {
        self.by_line.get(&line)
    }
}

/// File-level suppression table: project-relative path → rule tokens.
///
/// Loaded from an INI-like file with a `[suppress]` section of
/// `path = rule1, rule2` lines. Unknown sections are ignored; `#` comments
/// and blank lines are skipped.
#[derive(Debug, Default)]
pub struct FileSuppressions {
    by_path: HashMap<String, HashSet<String>>,
}

impl FileSuppressions {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RtLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut by_path: HashMap<String, HashSet<String>> = HashMap::new();
        let mut in_suppress = false;

        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                in_suppress = line == "[suppress]";
                continue;
            }
            if !in_suppress {
                continue;
            }

            let Some((path, rules)) = line.split_once('=') else {
                continue;
            };
            let tokens = rules
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToString::to_string);
            by_path
                .entry(path.trim().replace('\\', "/"))
                .or_default()
                .extend(tokens);
        }

        Self { by_path }
    }

    #[must_use]
    pub fn tokens_for(&self, path: &str) -> Option<&HashSet<String>> {
        self.by_path.get(path)
    }
}

/// A token suppresses a rule when it equals the full id or its family
/// prefix (`header` covers every `header/*`).
fn token_matches(token: &str, rule: &str) -> bool {
    token == rule
        || rule
            .strip_prefix(token)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn is_suppressed(
    violation: &Violation,
    inline: &InlineSuppressions,
    file_table: &FileSuppressions,
) -> bool {
    if let Some(tokens) = inline.tokens_at(violation.line)
        && tokens.iter().any(|t| token_matches(t, &violation.rule))
    {
        return true;
    }

    file_table
        .tokens_for(&violation.file)
        .is_some_and(|tokens| tokens.iter().any(|t| token_matches(t, &violation.rule)))
}

/// Split raw violations into (reported, suppressed count).
///
/// Suppressed violations are dropped from the report but never from the
/// statistics: the count travels with the result.
#[must_use]
pub fn resolve(
    violations: Vec<Violation>,
    inline: &InlineSuppressions,
    file_table: &FileSuppressions,
) -> (Vec<Violation>, usize) {
    let total = violations.len();
    let kept: Vec<Violation> = violations
        .into_iter()
        .filter(|v| !is_suppressed(v, inline, file_table))
        .collect();
    let suppressed = total - kept.len();
    (kept, suppressed)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
