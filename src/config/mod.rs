use crate::core::path::{config_file, default_repository_dir, ensure_dir, DEFAULT_LOCKFILE_NAME};
use crate::core::{LockError, LockResult};
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Local artifact repository (defaults to ~/.m2/repository)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_dir: Option<String>,

    /// Lockfile name searched for in the project root
    #[serde(default = "default_lockfile_name")]
    pub lockfile_name: String,

    /// Whether any difference makes the command fail
    #[serde(default = "default_true")]
    pub fail_on_difference: bool,

    /// Default report format
    #[serde(default)]
    pub report_format: ReportFormat,
}

fn default_lockfile_name() -> String {
    DEFAULT_LOCKFILE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository_dir: None,
            lockfile_name: default_lockfile_name(),
            fail_on_difference: true,
            report_format: ReportFormat::Text,
        }
    }
}

impl Config {
    /// Load config from the platform-specific config directory, creating a
    /// default if it doesn't exist
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\lockdiff\config.yaml
    /// - Linux: ~/.config/lockdiff/config.yaml
    /// - macOS: ~/Library/Application Support/lockdiff/config.yaml
    pub fn load() -> LockResult<Self> {
        let config_path = config_file()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> LockResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| LockError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save config to an explicit path, creating its directory
    pub fn save_to(&self, path: &Path) -> LockResult<()> {
        if let Some(dir) = path.parent() {
            ensure_dir(dir)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| LockError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the local repository path
    pub fn get_repository_dir(&self) -> LockResult<PathBuf> {
        if let Some(ref dir) = self.repository_dir {
            Ok(PathBuf::from(dir))
        } else {
            default_repository_dir()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.lockfile_name, "lockfile.json");
        assert!(config.fail_on_difference);
        assert_eq!(config.report_format, ReportFormat::Text);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested").join("config.yaml");

        let config = Config {
            repository_dir: Some("/srv/m2".to_string()),
            fail_on_difference: false,
            report_format: ReportFormat::Json,
            ..Config::default()
        };
        config.save_to(&config_path).unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get_repository_dir().unwrap(), PathBuf::from("/srv/m2"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        fs::write(&config_path, "report_format: json\n").unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.report_format, ReportFormat::Json);
        assert!(loaded.fail_on_difference);
        assert_eq!(loaded.lockfile_name, "lockfile.json");
    }

    #[test]
    fn test_invalid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        fs::write(&config_path, "fail_on_difference: [nope\n").unwrap();

        assert!(matches!(
            Config::load_from(&config_path),
            Err(LockError::Config(_))
        ));
    }
}
