//! Installer configuration.
//!
//! Built-in defaults match a stock ETS install. An optional `etstool.toml`
//! next to the executable can override any field; the file is only read,
//! never written.

use std::path::{Path, PathBuf};

use etstool_file_ops::InstallLayout;
use etstool_locator::LocatorConfig;
use serde::{Deserialize, Serialize};

/// Name of the optional override file next to the executable.
pub const CONFIG_FILE_NAME: &str = "etstool.toml";

/// Installer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Append-only operation log.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    /// Target detection settings.
    #[serde(default)]
    pub locator: LocatorConfig,

    /// Bundled resources and install destinations.
    #[serde(default)]
    pub files: InstallLayout,
}

pub fn default_log_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        PathBuf::from(r"C:\ets_tool_log.txt")
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::temp_dir().join("ets_tool_log.txt")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            locator: LocatorConfig::default(),
            files: InstallLayout::default(),
        }
    }
}

impl Config {
    /// Loads the override file next to the executable, or the defaults if
    /// there is none.
    pub fn load() -> anyhow::Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Loads configuration from `path`, falling back to defaults if it does
    /// not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Returns `<exe dir>/etstool.toml`.
fn config_path() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.log_path.ends_with("ets_tool_log.txt"));
        assert_eq!(config.locator.target_executables, vec!["Ets.exe", "shell.exe"]);
        assert_eq!(config.files.payload_dir, "etstoolbox");
        assert_eq!(config.files.library_file, "winmm.dll");
    }

    #[test]
    fn missing_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.files.redistributables.len(), 3);
    }

    #[test]
    fn partial_override() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
            log_path = "/var/log/etstool.log"

            [files]
            redistributables = ["msvcp140.dll"]
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_path, PathBuf::from("/var/log/etstool.log"));
        assert_eq!(config.files.redistributables, vec!["msvcp140.dll"]);
        assert_eq!(config.files.library_file, "winmm.dll");
        assert_eq!(config.locator.folder_keyword, "ets");
    }

    #[test]
    fn invalid_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "log_path = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn config_path_next_to_exe() {
        let path = config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }
}
