use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScanConfig;
use crate::error::{Result, RtLintError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Skip policy: extension allow-list, exact skip names, skip-directory
/// segments, generated-code suffixes, plus glob excludes. This is data
/// around the engine, not part of it.
pub struct SkipFilter {
    extensions: Vec<String>,
    skip_files: Vec<String>,
    skip_dirs: Vec<String>,
    skip_suffixes: Vec<String>,
    exclude: GlobSet,
}

impl SkipFilter {
    /// Build from scan configuration.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern).map_err(|source| RtLintError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude = builder.build().map_err(|source| RtLintError::InvalidGlob {
            pattern: "combined patterns".to_string(),
            source,
        })?;

        Ok(Self {
            extensions: config.extensions.clone(),
            skip_files: config.skip_files.clone(),
            skip_dirs: config.skip_dirs.clone(),
            skip_suffixes: config.skip_suffixes.clone(),
            exclude,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_skipped(&self, path: &Path) -> bool {
        let basename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        if self.skip_files.iter().any(|f| f == basename) {
            return true;
        }
        if self.skip_suffixes.iter().any(|s| basename.ends_with(s)) {
            return true;
        }

        // Skip-directory names match any segment of the path (the final
        // segment is the file itself, not a directory).
        let norm = path.to_string_lossy().replace('\\', "/");
        let segments: Vec<&str> = norm.split('/').collect();
        let dirs = &segments[..segments.len().saturating_sub(1)];
        if dirs
            .iter()
            .any(|seg| self.skip_dirs.iter().any(|d| d == seg))
        {
            return true;
        }

        self.exclude.is_match(path)
    }
}

impl FileFilter for SkipFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_skipped(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
