use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "rt-lint")]
#[command(version, about = "Lint project source files against coding conventions")]
#[command(long_about = "Checks raytracer source files for convention violations the \
    compiler cannot catch: file headers, assertion density, GPU struct size \
    asserts, module include boundaries, naming, and duplicated scene state.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - One or more violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Specific files to check (default: all files under the configured roots)
    pub files: Vec<PathBuf>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Only run rule families matching this prefix (e.g. 'header', 'tiger')
    #[arg(long)]
    pub rule: Option<String>,

    /// Show violation summary counts instead of individual violations
    #[arg(long)]
    pub summary: bool,

    /// Only print the final count
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Path to configuration file (default: .rt-lint.toml under the root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Path to the file-level suppression table
    #[arg(long)]
    pub suppress_file: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
