use crate::violation::Violation;

use super::{FileContext, RuleCheck};

const PRAGMA_ONCE: &str = "#pragma once";

/// Header files must start with `#pragma once` on line 1.
pub struct PragmaOnce;

impl RuleCheck for PragmaOnce {
    fn id(&self) -> &'static str {
        "header/pragma-once"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if !ctx.is_header() {
            return Vec::new();
        }

        if ctx.lines.first().is_some_and(|l| l.trim() == PRAGMA_ONCE) {
            return Vec::new();
        }

        vec![Violation::new(
            ctx.path,
            1,
            self.id(),
            "Header files must start with '#pragma once' on line 1",
        )]
    }
}

/// The description comment must be `// <basename> — <description>`.
///
/// Line 2 for headers (after `#pragma once`), line 1 for source files.
/// An em-dash or a run of hyphens both count as the separator.
pub struct FileDescription;

impl RuleCheck for FileDescription {
    fn id(&self) -> &'static str {
        "header/description"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let basename = ctx.basename();
        let check_line = if ctx.is_header() { 2 } else { 1 };

        let Some(target) = ctx.lines.get(check_line - 1) else {
            return vec![Violation::new(
                ctx.path,
                1,
                self.id(),
                "File must have a header description comment",
            )];
        };

        if description_matches(target, basename) {
            return Vec::new();
        }

        vec![Violation::new(
            ctx.path,
            check_line,
            self.id(),
            format!("Line {check_line} must be '// {basename} \u{2014} <description>'"),
        )]
    }
}

fn description_matches(line: &str, basename: &str) -> bool {
    let Some(rest) = line.strip_prefix("//") else {
        return false;
    };
    let Some(rest) = rest.trim_start().strip_prefix(basename) else {
        return false;
    };
    let rest = rest.trim_start();

    let after_dash = if let Some(r) = rest.strip_prefix('\u{2014}') {
        r
    } else {
        let trimmed = rest.trim_start_matches('-');
        if trimmed.len() == rest.len() {
            return false;
        }
        trimmed
    };

    // The separator must be followed by an actual description.
    !after_dash.trim_start().is_empty()
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
