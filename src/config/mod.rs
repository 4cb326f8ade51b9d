mod model;

pub use model::{Config, OwnedMember, RulesConfig, ScanConfig, SceneConstant};

use std::fs;
use std::path::Path;

use crate::error::{Result, RtLintError};

/// Default configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".rt-lint.toml";

/// Load configuration.
///
/// An explicit path must exist; otherwise `.rt-lint.toml` under `root` is
/// used when present, and built-in defaults when not.
///
/// # Errors
/// Returns an error if an explicitly given file is missing or unparsable.
pub fn load(explicit: Option<&Path>, root: &Path, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(RtLintError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        return load_from_path(path);
    }

    let default_path = root.join(CONFIG_FILE_NAME);
    if default_path.exists() {
        return load_from_path(&default_path);
    }

    Ok(Config::default())
}

fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| RtLintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
