use regex::Regex;

use crate::config::RulesConfig;
use crate::error::Result;
use crate::extractor::FunctionExtractor;
use crate::violation::Violation;

use super::{FileContext, RuleCheck, compile_pattern};

/// Non-trivial functions must contain a minimum number of assertions.
///
/// Heuristic by nature (the extractor has no grammar), so violations are
/// warnings rather than hard errors.
pub struct AssertionDensity {
    extractor: FunctionExtractor,
    assertion: Regex,
    min_assertions: usize,
}

impl AssertionDensity {
    /// # Errors
    /// Returns an error if a configured macro name breaks the pattern.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let alternation = config
            .assertion_macros
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            extractor: FunctionExtractor::new(
                config.min_function_body_lines,
                &config.assertion_macros,
            ),
            assertion: compile_pattern(&format!(r"\b(?:{alternation})\b"))?,
            min_assertions: config.min_assertions,
        })
    }
}

impl RuleCheck for AssertionDensity {
    fn id(&self) -> &'static str {
        "tiger/assertion-density"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        // asserts.h defines the macros; counting them there is meaningless.
        if ctx.basename() == "asserts.h" {
            return Vec::new();
        }

        let mut violations = Vec::new();

        for func in self.extractor.extract(&ctx.lines) {
            let body = &ctx.lines[func.start_line - 1..func.end_line];
            let count: usize = body.iter().map(|l| self.assertion.find_iter(l).count()).sum();

            if count < self.min_assertions {
                violations.push(Violation::warning(
                    ctx.path,
                    func.start_line,
                    self.id(),
                    format!(
                        "Function '{}' has {} assertion(s), minimum is {} \
                         (Tiger Style: at least {} per non-trivial function)",
                        func.name, count, self.min_assertions, self.min_assertions
                    ),
                ));
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "tiger_tests.rs"]
mod tests;
