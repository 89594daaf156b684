use crate::core::error::{LockError, LockResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Default lockfile name written by the build-tool plugin
pub const DEFAULT_LOCKFILE_NAME: &str = "lockfile.json";

/// Get the lockdiff home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\lockdiff
/// - Linux: ~/.config/lockdiff
/// - macOS: ~/Library/Application Support/lockdiff
pub fn lockdiff_home() -> LockResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| LockError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("lockdiff"))
}

/// Get the config file path
pub fn config_file() -> LockResult<PathBuf> {
    Ok(lockdiff_home()?.join("config.yaml"))
}

/// Get the default local artifact repository (~/.m2/repository)
pub fn default_repository_dir() -> LockResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| LockError::Path("Could not determine home directory".to_string()))?;
    Ok(home.join(".m2").join("repository"))
}

/// Find the project root by walking up from `start` until a directory
/// containing `lockfile_name` is found
pub fn find_project_root(start: &Path, lockfile_name: &str) -> LockResult<PathBuf> {
    let mut current = start;

    loop {
        if current.join(lockfile_name).exists() {
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => {
                return Err(LockError::Lockfile(format!(
                    "No lockfile named {} found in {} or any parent directory",
                    lockfile_name,
                    start.display()
                )))
            }
        }
    }
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> LockResult<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
