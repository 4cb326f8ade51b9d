#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the rt-lint binary.
#[macro_export]
macro_rules! rt_lint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("rt-lint"))
    };
}

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates an rt-lint config file in the project root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".rt-lint.toml", content);
    }

    /// Creates a suppression table in the project root.
    pub fn create_suppress_file(&self, content: &str) {
        self.create_file(".rt-lint-suppress", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a header that satisfies every default check.
    pub fn create_clean_header(&self, relative_path: &str) {
        let basename = relative_path.rsplit('/').next().unwrap();
        let content = format!("#pragma once\n// {basename} \u{2014} a well mannered header\n");
        self.create_file(relative_path, &content);
    }

    /// Creates a header missing its pragma and using a snake_case type name.
    pub fn create_bad_header(&self, relative_path: &str) {
        self.create_file(relative_path, "struct bad_thing {\n};\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
