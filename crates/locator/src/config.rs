//! Locator configuration.
//!
//! Defaults mirror the stock install of the target application on Windows.

use serde::{Deserialize, Serialize};

/// Executable names that identify the target application.
pub const DEFAULT_TARGET_EXECUTABLES: &[&str] = &["Ets.exe", "shell.exe"];

/// Keyword matched (case-insensitively) against candidate folder names.
pub const DEFAULT_FOLDER_KEYWORD: &str = "ets";

/// Placeholder substituted with the `USERNAME` environment variable.
pub const USERNAME_PLACEHOLDER: &str = "%USERNAME%";

/// A parent directory scanned by the folder search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRoot {
    /// Environment variable holding the directory, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    /// Literal used when `env` is unset. May contain [`USERNAME_PLACEHOLDER`].
    pub fallback: String,
}

impl SearchRoot {
    /// A root read from `var`, falling back to `fallback`.
    pub fn from_env(var: &str, fallback: &str) -> Self {
        Self {
            env: Some(var.into()),
            fallback: fallback.into(),
        }
    }

    /// A root at a fixed path.
    pub fn fixed(path: &str) -> Self {
        Self {
            env: None,
            fallback: path.into(),
        }
    }
}

/// Settings for the detection chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Executable names accepted by the process scan and the manual pick.
    #[serde(default = "default_target_executables")]
    pub target_executables: Vec<String>,

    /// Keyword a folder name must contain to match the folder search.
    #[serde(default = "default_folder_keyword")]
    pub folder_keyword: String,

    /// Parent directories scanned by the folder search, in priority order.
    #[serde(default = "default_search_roots")]
    pub search_roots: Vec<SearchRoot>,
}

fn default_target_executables() -> Vec<String> {
    DEFAULT_TARGET_EXECUTABLES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_folder_keyword() -> String {
    DEFAULT_FOLDER_KEYWORD.into()
}

fn default_search_roots() -> Vec<SearchRoot> {
    vec![
        SearchRoot::from_env("ProgramFiles", r"C:\Program Files"),
        SearchRoot::from_env("ProgramFiles(x86)", r"C:\Program Files (x86)"),
        SearchRoot::from_env("LOCALAPPDATA", r"C:\Users\%USERNAME%\AppData\Local"),
        SearchRoot::from_env("APPDATA", r"C:\Users\%USERNAME%\AppData\Roaming"),
        SearchRoot::fixed(r"C:\"),
    ]
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            target_executables: default_target_executables(),
            folder_keyword: default_folder_keyword(),
            search_roots: default_search_roots(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LocatorConfig::default();
        assert_eq!(config.target_executables, vec!["Ets.exe", "shell.exe"]);
        assert_eq!(config.folder_keyword, "ets");
        assert_eq!(config.search_roots.len(), 5);
        assert_eq!(
            config.search_roots[0],
            SearchRoot::from_env("ProgramFiles", r"C:\Program Files")
        );
        assert_eq!(config.search_roots[4], SearchRoot::fixed(r"C:\"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: LocatorConfig = toml::from_str(r#"folder_keyword = "tingshuo""#).unwrap();
        assert_eq!(config.folder_keyword, "tingshuo");
        assert_eq!(config.target_executables.len(), 2);
        assert_eq!(config.search_roots.len(), 5);
    }

    #[test]
    fn search_root_without_env() {
        let config: LocatorConfig = toml::from_str(
            r#"
            [[search_roots]]
            fallback = "D:\\Games"
            "#,
        )
        .unwrap();
        assert_eq!(config.search_roots, vec![SearchRoot::fixed(r"D:\Games")]);
    }
}
