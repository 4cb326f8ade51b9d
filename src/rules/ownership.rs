use std::collections::HashSet;

use regex::Regex;

use crate::config::RulesConfig;
use crate::error::Result;
use crate::violation::Violation;

use super::{FileContext, RuleCheck, compile_pattern};

/// Tracks the innermost enclosing struct/class name by brace depth.
///
/// Same heuristic footing as the function extractor: braces in literals
/// and comments are counted, and that is accepted.
struct ScopeTracker {
    class_pattern: Regex,
    depth: i64,
    stack: Vec<(String, i64)>,
    pending: Option<String>,
}

impl ScopeTracker {
    fn new() -> Self {
        Self {
            class_pattern: Regex::new(r"^\s*(?:class|struct)\s+(\w+)").expect("Invalid regex"),
            depth: 0,
            stack: Vec::new(),
            pending: None,
        }
    }

    /// Fold one line into the tracker, returning the scope name that was
    /// current while this line's content was read.
    fn advance(&mut self, line: &str) -> Option<String> {
        let current = self.stack.last().map(|(name, _)| name.clone());

        let trimmed = line.trim();
        if let Some(caps) = self.class_pattern.captures(trimmed)
            && !trimmed.ends_with(';')
        {
            self.pending = caps.get(1).map(|m| m.as_str().to_string());
        }

        for ch in line.chars() {
            match ch {
                '{' => {
                    self.depth += 1;
                    if let Some(name) = self.pending.take() {
                        self.stack.push((name, self.depth));
                    }
                }
                '}' => {
                    self.depth -= 1;
                    while self
                        .stack
                        .last()
                        .is_some_and(|(_, entered)| *entered > self.depth)
                    {
                        self.stack.pop();
                    }
                }
                _ => {}
            }
        }

        current
    }
}

/// Flags member variables duplicating state another component already owns.
///
/// The table maps member-name patterns to "who owns this value and how to
/// read it." Data-transfer carriers (structs whose whole purpose is a
/// snapshot of external state) are exempt by name.
pub struct DuplicateState {
    owned: Vec<(Regex, String)>,
    exempt: HashSet<String>,
}

impl DuplicateState {
    /// # Errors
    /// Returns an error if a configured pattern fails to compile.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let owned = config
            .owned_members
            .iter()
            .map(|m| Ok((compile_pattern(&m.pattern)?, m.owner.clone())))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            owned,
            exempt: config.exempt_structs.iter().cloned().collect(),
        })
    }
}

impl RuleCheck for DuplicateState {
    fn id(&self) -> &'static str {
        "own/duplicate-state"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut tracker = ScopeTracker::new();

        for (i, line) in ctx.lines.iter().enumerate() {
            let scope = tracker.advance(line);

            let Some(scope_name) = scope else {
                continue;
            };
            if self.exempt.contains(&scope_name) {
                continue;
            }
            if !is_declaration_like(line) {
                continue;
            }

            for (pattern, owner) in &self.owned {
                if let Some(m) = pattern.find(line) {
                    violations.push(Violation::warning(
                        ctx.path,
                        i + 1,
                        self.id(),
                        format!(
                            "Member '{}' in '{scope_name}' duplicates state owned by {owner}",
                            m.as_str()
                        ),
                    ));
                }
            }
        }

        violations
    }
}

/// Declaration-like: carries an initializer or a statement terminator, and
/// names something with an underscore (member naming convention).
fn is_declaration_like(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with("//") || trimmed.starts_with('#') {
        return false;
    }
    (trimmed.contains('=') || trimmed.ends_with(';')) && trimmed.contains('_')
}

/// Flags hardcoded constants for concepts the scene owns, any scope.
///
/// A `SUN_COLOR` constant in a module goes stale the moment the
/// WorldEnvironment changes; the scene is the single source of truth.
pub struct SceneConstantCheck {
    patterns: Vec<(Regex, String)>,
}

impl SceneConstantCheck {
    /// # Errors
    /// Returns an error if a configured pattern fails to compile.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let patterns = config
            .scene_constants
            .iter()
            .map(|c| Ok((compile_pattern(&c.pattern)?, c.concept.clone())))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }
}

impl RuleCheck for SceneConstantCheck {
    fn id(&self) -> &'static str {
        "own/scene-constant"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (i, line) in ctx.lines.iter().enumerate() {
            if !is_constant_declaration(line) {
                continue;
            }

            for (pattern, concept) in &self.patterns {
                if let Some(m) = pattern.find(line) {
                    violations.push(Violation::warning(
                        ctx.path,
                        i + 1,
                        self.id(),
                        format!(
                            "Constant '{}' hardcodes {concept}; the scene owns this value",
                            m.as_str()
                        ),
                    ));
                }
            }
        }

        violations
    }
}

fn is_constant_declaration(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("const ")
        || trimmed.starts_with("constexpr ")
        || trimmed.starts_with("static const")
        || trimmed.starts_with("static constexpr")
        || trimmed.starts_with("#define ")
}

#[cfg(test)]
#[path = "ownership_tests.rs"]
mod tests;
