//! Bundled resources and installation targets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory next to the executable holding the bundled resources.
pub const RESOURCE_DIR_NAME: &str = "Resource";

/// Where install reads its files from and where it puts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallLayout {
    /// Bundled resources directory.
    #[serde(default = "default_resource_dir")]
    pub resource_dir: PathBuf,

    /// Payload directory name, both in resources and in the target.
    #[serde(default = "default_payload_dir")]
    pub payload_dir: String,

    /// Hook library placed next to the target executable.
    #[serde(default = "default_library_file")]
    pub library_file: String,

    /// Runtime libraries copied into the system library directories.
    #[serde(default = "default_redistributables")]
    pub redistributables: Vec<String>,

    /// System library directories. Missing ones are skipped.
    #[serde(default = "default_system_library_dirs")]
    pub system_library_dirs: Vec<PathBuf>,
}

/// Returns `<exe dir>/Resource`, or a relative `Resource` if the executable
/// path is unavailable.
pub fn default_resource_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(RESOURCE_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(RESOURCE_DIR_NAME))
}

fn default_payload_dir() -> String {
    "etstoolbox".into()
}

fn default_library_file() -> String {
    "winmm.dll".into()
}

// Debug CRT builds; the shipped payload links against them.
fn default_redistributables() -> Vec<String> {
    vec![
        "msvcp140d.dll".into(),
        "ucrtbased.dll".into(),
        "vcruntime140d.dll".into(),
    ]
}

fn default_system_library_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from(r"C:\Windows\SysWOW64"),
        PathBuf::from(r"C:\Windows\System32"),
    ]
}

impl Default for InstallLayout {
    fn default() -> Self {
        Self {
            resource_dir: default_resource_dir(),
            payload_dir: default_payload_dir(),
            library_file: default_library_file(),
            redistributables: default_redistributables(),
            system_library_dirs: default_system_library_dirs(),
        }
    }
}

impl InstallLayout {
    /// Bundled payload directory.
    pub fn payload_source(&self) -> PathBuf {
        self.resource_dir.join(&self.payload_dir)
    }

    /// Installed payload directory inside `target`.
    pub fn payload_dest(&self, target: &Path) -> PathBuf {
        target.join(&self.payload_dir)
    }

    /// Bundled hook library.
    pub fn library_source(&self) -> PathBuf {
        self.resource_dir.join(&self.library_file)
    }

    /// Installed hook library inside `target`.
    pub fn library_dest(&self, target: &Path) -> PathBuf {
        target.join(&self.library_file)
    }

    /// Bundled copy of a redistributable.
    pub fn redistributable_source(&self, name: &str) -> PathBuf {
        self.resource_dir.join(name)
    }
}
