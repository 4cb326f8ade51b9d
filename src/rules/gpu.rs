use std::collections::HashSet;

use regex::Regex;

use crate::violation::Violation;

use super::{FileContext, RuleCheck};

/// Every `GPU*Packed`/`GPU*Wide`/`GPU*Constants` struct must have a
/// `static_assert(sizeof(...))` somewhere in the same file.
///
/// GPU transfer structs are laid out for std430 buffers; a missing size
/// assertion means a silent ABI break when a field is added.
pub struct GpuStaticAssert {
    struct_pattern: Regex,
    assert_pattern: Regex,
}

impl Default for GpuStaticAssert {
    fn default() -> Self {
        Self::new()
    }
}

impl GpuStaticAssert {
    /// # Panics
    /// Panics if the built-in pattern fails to compile (programming error).
    #[must_use]
    pub fn new() -> Self {
        Self {
            struct_pattern: Regex::new(r"(?m)^struct\s+(GPU\w+(?:Packed|Wide|Constants))\s*\{")
                .expect("Invalid regex"),
            assert_pattern: Regex::new(r"static_assert\s*\(\s*sizeof\s*\(\s*(\w+)\s*\)")
                .expect("Invalid regex"),
        }
    }
}

impl RuleCheck for GpuStaticAssert {
    fn id(&self) -> &'static str {
        "gpu/static-assert"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        // The assertion may appear anywhere in the file, before or after
        // the definition. Collect every asserted name once.
        let asserted: HashSet<&str> = self
            .assert_pattern
            .captures_iter(ctx.content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();

        for caps in self.struct_pattern.captures_iter(ctx.content) {
            let Some(name_match) = caps.get(1) else {
                continue;
            };
            let struct_name = name_match.as_str();

            if !asserted.contains(struct_name) {
                let line = ctx.content[..name_match.start()].matches('\n').count() + 1;
                violations.push(Violation::new(
                    ctx.path,
                    line,
                    self.id(),
                    format!("GPU struct '{struct_name}' missing static_assert(sizeof(...))"),
                ));
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "gpu_tests.rs"]
mod tests;
