pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod suppress;
pub mod violation;

pub use error::{Result, RtLintError};
pub use violation::{Severity, Violation};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
