//! Config file discovery and loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::toml_schema::InidocToml;

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// TOML parsing error
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Search upward from `start_dir` for a file with the given name.
///
/// If `stop_at_git_root` is true, stops searching when a `.git` directory is found.
/// Returns `None` if the file is not found.
pub fn find_file_upward(
    start_dir: &Path,
    filename: &str,
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find inidoc.toml by searching upward from the given directory.
///
/// Stops at the first `inidoc.toml` found, or at the git repository root
/// (directory containing `.git`), whichever comes first.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, "inidoc.toml", true)
}

/// Load and parse inidoc.toml from the given path.
pub fn load_config(path: &Path) -> Result<InidocToml, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: InidocToml = toml::from_str(&content)?;
    Ok(config)
}
