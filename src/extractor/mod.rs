use std::collections::HashSet;

use regex::Regex;

/// A candidate function body located by the brace-depth heuristic.
///
/// Line numbers are 1-based and inclusive. `start_line` is the signature
/// line, `end_line` the line whose `}` returns brace depth to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBody {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// Names that match the signature pattern but are never function definitions.
const RESERVED_NAMES: &[&str] = &[
    "if",
    "else",
    "while",
    "for",
    "switch",
    "return",
    "do",
    "sizeof",
    "alignof",
    "decltype",
    "static_assert",
    "static_cast",
    "dynamic_cast",
    "const_cast",
    "reinterpret_cast",
    "co_await",
    "co_yield",
    "co_return",
    "void",
];

/// Heuristic function-body locator.
///
/// This is a line-oriented quasi-parser, not a C++ grammar. It finds lines
/// that look like function definitions and matches braces by counting
/// characters. Braces inside string/character literals or block comments
/// are counted too; the resulting misfires are an accepted limitation and
/// are handled through suppression, not special cases here.
pub struct FunctionExtractor {
    not_function: Regex,
    signature: Regex,
    reserved: HashSet<String>,
    min_body_lines: usize,
}

impl FunctionExtractor {
    /// # Panics
    /// Panics if the built-in patterns fail to compile (programming error).
    #[must_use]
    pub fn new(min_body_lines: usize, extra_reserved: &[String]) -> Self {
        let mut reserved: HashSet<String> =
            RESERVED_NAMES.iter().map(ToString::to_string).collect();
        // Assertion macro names look like calls and would otherwise match.
        reserved.extend(extra_reserved.iter().cloned());

        Self {
            not_function: Regex::new(
                r"^\s*(?:struct|class|enum|namespace|if|else|for|while|switch|do|try|catch|using|typedef|template|public|private|protected|static_assert|#|//|/\*|\*)",
            )
            .expect("Invalid regex"),
            signature: Regex::new(
                r"^[^#/]*\b(\w+)\s*\([^;]*\)\s*(?:const\s*)?(?:override\s*)?(?:final\s*)?(?:noexcept\s*)?(?:->.*?)?\s*\{?\s*$",
            )
            .expect("Invalid regex"),
            reserved,
            min_body_lines,
        }
    }

    /// Extract candidate bodies from `lines`, top to bottom.
    ///
    /// Bodies with fewer than `min_body_lines` significant lines are
    /// discarded: getters, setters and one-liners are exempt from density
    /// checks by construction.
    #[must_use]
    pub fn extract(&self, lines: &[&str]) -> Vec<FunctionBody> {
        let mut functions = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let stripped = lines[i].trim();

            if stripped.is_empty() || self.not_function.is_match(stripped) {
                i += 1;
                continue;
            }

            let Some(name) = self.candidate_name(stripped) else {
                i += 1;
                continue;
            };

            // Opening brace on the signature line or the one right after.
            let brace_line = if stripped.contains('{') {
                i
            } else if lines.get(i + 1).is_some_and(|l| l.trim_start().starts_with('{')) {
                i + 1
            } else {
                i += 1;
                continue;
            };

            match find_body_end(lines, brace_line) {
                Some(end) => {
                    if significant_lines(&lines[brace_line..=end]) >= self.min_body_lines {
                        functions.push(FunctionBody {
                            name,
                            start_line: i + 1,
                            end_line: end + 1,
                        });
                    }
                    i = end + 1;
                }
                // Unterminated body: drop the candidate, never report it.
                None => i += 1,
            }
        }

        functions
    }

    fn candidate_name(&self, stripped: &str) -> Option<String> {
        let caps = self.signature.captures(stripped)?;
        let name = caps.get(1).map_or("", |m| m.as_str());
        if self.reserved.contains(name) {
            return None;
        }
        Some(name.to_string())
    }
}

/// Scan from `start` counting every brace character until depth returns to
/// zero; returns the 0-based index of the closing line. Depth is seeded by
/// the definition line itself, so single-line bodies close immediately.
fn find_body_end(lines: &[&str], start: usize) -> Option<usize> {
    let mut depth: i64 = 0;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
    }

    None
}

/// Count body lines that carry code: non-blank, not a `//` comment, not a
/// lone brace.
fn significant_lines(body: &[&str]) -> usize {
    body.iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with("//") && *l != "{" && *l != "}")
        .count()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
