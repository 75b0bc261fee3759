//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-fork-manager/`, `~/.local/share/gh-fork-manager/`, `~/.cache/gh-fork-manager/`
//! - macOS: `~/Library/Application Support/gh-fork-manager/`, `~/Library/Caches/gh-fork-manager/`
//! - Windows: `%APPDATA%\gh-fork-manager\`, `%LOCALAPPDATA%\gh-fork-manager\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const APP_NAME: &str = "gh-fork-manager";

/// File name of the audit log inside the data directory
const AUDIT_LOG_FILE: &str = "actions.log";

/// Get the application config directory
/// Returns ~/.config/gh-fork-manager/ on Linux
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application data directory, home of the audit log
/// Returns ~/.local/share/gh-fork-manager/ on Linux
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine data directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
/// Returns ~/.cache/gh-fork-manager/ on Linux, ~/Library/Caches/gh-fork-manager/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the global config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Default location of the audit log
///
/// Falls back to `actions.log` in the working directory when the platform
/// has no data directory.
pub fn default_log_path() -> PathBuf {
    data_dir()
        .map(|dir| dir.join(AUDIT_LOG_FILE))
        .unwrap_or_else(|_| PathBuf::from(AUDIT_LOG_FILE))
}

/// Expand a leading `~` against the home directory
///
/// Paths without a leading tilde, and `~user` forms, are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_end_with_app_name() {
        assert!(config_dir().unwrap().ends_with(APP_NAME));
        assert!(data_dir().unwrap().ends_with(APP_NAME));
    }

    #[test]
    fn test_config_and_log_paths() {
        assert!(app_config_path().unwrap().ends_with("config.toml"));

        let log = default_log_path();
        assert!(log.ends_with(AUDIT_LOG_FILE));
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(
            expand_tilde(Path::new("~/logs/actions.log")),
            home.join("logs/actions.log")
        );
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(
            expand_tilde(Path::new("/var/log/actions.log")),
            PathBuf::from("/var/log/actions.log")
        );
        assert_eq!(
            expand_tilde(Path::new("~other/actions.log")),
            PathBuf::from("~other/actions.log")
        );
    }
}
