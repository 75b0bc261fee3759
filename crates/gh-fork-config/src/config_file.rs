use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".gh-fork-manager.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for:
/// 1. `.gh-fork-manager.toml` in the current working directory
/// 2. `config.toml` in the platform config directory
///
/// Returns the path and content of the first file found, `None` when there
/// is none. A file that exists but cannot be read is an error.
pub fn load_config_file() -> Result<Option<(PathBuf, String)>> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Ok(global) = crate::paths::app_config_path() {
        candidates.push(global);
    }

    for candidate in candidates {
        if let Some(content) = read_if_exists(&candidate)? {
            log::debug!("Loaded config from {}", candidate.display());
            return Ok(Some((candidate, content)));
        }
    }

    Ok(None)
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }

    std::fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}
