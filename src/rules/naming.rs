use regex::Regex;

use crate::violation::Violation;

use super::{FileContext, RuleCheck};

/// Struct/class names must be PascalCase.
///
/// ALL-CAPS names (macro-defined) and `_`-prefixed internals are skipped.
/// An interface prefix (`I` followed by another uppercase letter, as in
/// `IRayService`) is stripped before the test so that `Intersection` is
/// not mistaken for an interface.
pub struct ClassPascal {
    class_pattern: Regex,
}

impl Default for ClassPascal {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassPascal {
    /// # Panics
    /// Panics if the built-in pattern fails to compile (programming error).
    #[must_use]
    pub fn new() -> Self {
        Self {
            class_pattern: Regex::new(r"^\s*(?:class|struct)\s+(\w+)\s*[:{]")
                .expect("Invalid regex"),
        }
    }
}

impl RuleCheck for ClassPascal {
    fn id(&self) -> &'static str {
        "naming/class-pascal"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (i, line) in ctx.lines.iter().enumerate() {
            let Some(caps) = self.class_pattern.captures(line) else {
                continue;
            };
            let Some(name) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };

            if is_all_upper(name) || name.starts_with('_') {
                continue;
            }

            if !is_pascal_case(strip_interface_prefix(name)) {
                violations.push(Violation::new(
                    ctx.path,
                    i + 1,
                    self.id(),
                    format!("Class/struct '{name}' should be PascalCase"),
                ));
            }
        }

        violations
    }
}

fn is_all_upper(name: &str) -> bool {
    name.chars().all(|c| !c.is_ascii_lowercase())
}

fn strip_interface_prefix(name: &str) -> &str {
    let mut chars = name.chars();
    if chars.next() == Some('I') && chars.next().is_some_and(char::is_uppercase) {
        &name[1..]
    } else {
        name
    }
}

fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(char::is_uppercase) && name.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
