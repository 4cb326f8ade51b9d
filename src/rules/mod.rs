mod boundary;
mod gpu;
mod header;
mod naming;
mod ownership;
mod tiger;

pub use boundary::ModuleBoundary;
pub use gpu::GpuStaticAssert;
pub use header::{FileDescription, PragmaOnce};
pub use naming::ClassPascal;
pub use ownership::{DuplicateState, SceneConstantCheck};
pub use tiger::AssertionDensity;

use crate::config::RulesConfig;
use crate::error::{Result, RtLintError};
use crate::violation::Violation;

/// The parsed view of one file, shared by every check.
///
/// `path` is project-relative with forward slashes; `lines` index 0 is
/// line 1 in every `Violation`.
pub struct FileContext<'a> {
    pub path: &'a str,
    pub content: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> FileContext<'a> {
    #[must_use]
    pub fn new(path: &'a str, content: &'a str) -> Self {
        Self {
            path,
            content,
            lines: content.lines().collect(),
        }
    }

    #[must_use]
    pub fn basename(&self) -> &'a str {
        self.path.rsplit('/').next().unwrap_or(self.path)
    }

    #[must_use]
    pub fn is_header(&self) -> bool {
        self.path.ends_with(".h")
    }
}

/// A single convention check.
///
/// Checks are pure functions of the file context: no check reads another
/// check's output or retains state across files, which is what makes
/// per-file fan-out safe. A malformed line must degrade to "no violation
/// found", never a panic.
pub trait RuleCheck: Send + Sync {
    /// Unique identifier, `family/check-name`.
    fn id(&self) -> &'static str;

    fn check(&self, ctx: &FileContext) -> Vec<Violation>;
}

/// A named, ordered group of checks sharing an identifier prefix.
pub struct RuleFamily {
    pub name: &'static str,
    pub checks: Vec<Box<dyn RuleCheck>>,
}

/// The static family→checks table.
///
/// Built once at startup from configuration and passed by reference into
/// the engine; checks never register themselves via side effects.
pub struct RuleRegistry {
    families: Vec<RuleFamily>,
}

impl RuleRegistry {
    /// Build the full registry from rule configuration.
    ///
    /// # Errors
    /// Returns an error if a configured pattern fails to compile.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let families = vec![
            RuleFamily {
                name: "header",
                checks: vec![Box::new(PragmaOnce), Box::new(FileDescription)],
            },
            RuleFamily {
                name: "tiger",
                checks: vec![Box::new(AssertionDensity::from_config(config)?)],
            },
            RuleFamily {
                name: "gpu",
                checks: vec![Box::new(GpuStaticAssert::new())],
            },
            RuleFamily {
                name: "module",
                checks: vec![Box::new(ModuleBoundary::from_config(config))],
            },
            RuleFamily {
                name: "naming",
                checks: vec![Box::new(ClassPascal::new())],
            },
            RuleFamily {
                name: "own",
                checks: vec![
                    Box::new(DuplicateState::from_config(config)?),
                    Box::new(SceneConstantCheck::from_config(config)?),
                ],
            },
        ];

        Ok(Self { families })
    }

    #[must_use]
    pub fn families(&self) -> &[RuleFamily] {
        &self.families
    }

    /// Families whose name starts with `filter`; all families when `None`.
    #[must_use]
    pub fn matching(&self, filter: Option<&str>) -> Vec<&RuleFamily> {
        match filter {
            None => self.families.iter().collect(),
            Some(prefix) => self
                .families
                .iter()
                .filter(|f| f.name.starts_with(prefix))
                .collect(),
        }
    }

    /// Reject filters that select no family before any file is scanned.
    ///
    /// # Errors
    /// Returns `UnknownFamily` if the prefix matches nothing.
    pub fn validate_filter(&self, filter: &str) -> Result<()> {
        if self.families.iter().any(|f| f.name.starts_with(filter)) {
            Ok(())
        } else {
            Err(RtLintError::UnknownFamily(filter.to_string()))
        }
    }
}

/// Compile a user-supplied pattern, wrapping failures with the pattern text.
pub(crate) fn compile_pattern(pattern: &str) -> Result<regex::Regex> {
    regex::Regex::new(pattern).map_err(|source| RtLintError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
