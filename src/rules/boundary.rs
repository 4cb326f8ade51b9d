use regex::Regex;

use crate::config::RulesConfig;
use crate::violation::Violation;

use super::{FileContext, RuleCheck};

/// Module code must not include server internals.
///
/// Modules talk to the raytracer through the service API; reaching into
/// acceleration or dispatch headers couples them to rebuild-internal
/// layout. The forbidden list is data, scoped to the module path segment.
pub struct ModuleBoundary {
    include_pattern: Regex,
    segment: String,
    prefix: String,
    forbidden: Vec<String>,
    hint: String,
}

impl ModuleBoundary {
    /// # Panics
    /// Panics if the built-in include pattern fails to compile
    /// (programming error).
    #[must_use]
    pub fn from_config(config: &RulesConfig) -> Self {
        Self {
            include_pattern: Regex::new(r#"^\s*#include\s*[<"]([^>"]+)[>"]"#)
                .expect("Invalid regex"),
            segment: format!("/{}/", config.module_segment),
            prefix: format!("{}/", config.module_segment),
            forbidden: config.forbidden_module_includes.clone(),
            hint: config.boundary_hint.clone(),
        }
    }
}

impl RuleCheck for ModuleBoundary {
    fn id(&self) -> &'static str {
        "module/boundary"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if !ctx.path.contains(&self.segment) && !ctx.path.starts_with(&self.prefix) {
            return Vec::new();
        }

        let mut violations = Vec::new();

        for (i, line) in ctx.lines.iter().enumerate() {
            let Some(caps) = self.include_pattern.captures(line) else {
                continue;
            };
            let Some(included) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };

            for forbidden in &self.forbidden {
                if included == forbidden || included.ends_with(&format!("/{forbidden}")) {
                    violations.push(Violation::new(
                        ctx.path,
                        i + 1,
                        self.id(),
                        format!(
                            "Modules must not include '{forbidden}' \u{2014} {}",
                            self.hint
                        ),
                    ));
                }
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "boundary_tests.rs"]
mod tests;
