//! The ordered detection chain.

use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::LocatorError;
use crate::config::LocatorConfig;
use crate::picker::{ExecutablePicker, pick_target_dir};
use crate::process::{ProcessSource, SystemProcesses, scan_processes};
use crate::search::search_folders;

/// Detection method that produced a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionMethod {
    ProcessScan,
    FolderSearch,
    ManualPick,
}

impl ResolutionMethod {
    /// All methods in the order they are tried.
    pub fn chain() -> &'static [ResolutionMethod] {
        &[
            ResolutionMethod::ProcessScan,
            ResolutionMethod::FolderSearch,
            ResolutionMethod::ManualPick,
        ]
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionMethod::ProcessScan => write!(f, "process scan"),
            ResolutionMethod::FolderSearch => write!(f, "folder search"),
            ResolutionMethod::ManualPick => write!(f, "manual pick"),
        }
    }
}

/// A located installation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub dir: PathBuf,
    pub method: ResolutionMethod,
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Resolves the target application's installation directory.
pub struct Locator<S = SystemProcesses> {
    config: LocatorConfig,
    processes: S,
    env: EnvLookup,
}

impl Locator<SystemProcesses> {
    /// Creates a locator reading live OS processes and environment.
    pub fn new(config: LocatorConfig) -> Self {
        Self::with_processes(config, SystemProcesses)
    }
}

impl<S: ProcessSource> Locator<S> {
    /// Creates a locator with a custom process source.
    pub fn with_processes(config: LocatorConfig, processes: S) -> Self {
        Self {
            config,
            processes,
            env: Box::new(|name| std::env::var(name).ok()),
        }
    }

    /// Replaces the environment lookup used to expand search roots.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.env = Box::new(lookup);
        self
    }

    /// Runs the detection chain. The first method that finds a directory wins;
    /// `picker` is only consulted when both automatic methods fail.
    ///
    /// Returns [`LocatorError::NotFound`] when every method fails, including
    /// when the user cancels the manual pick.
    pub fn resolve(
        &self,
        picker: &mut dyn ExecutablePicker,
    ) -> Result<ResolvedTarget, LocatorError> {
        for &method in ResolutionMethod::chain() {
            info!(%method, "trying detection method");

            let found = match method {
                ResolutionMethod::ProcessScan => {
                    scan_processes(&self.processes, &self.config.target_executables)
                }
                ResolutionMethod::FolderSearch => search_folders(
                    &self.config.search_roots,
                    &self.config.folder_keyword,
                    &self.env,
                ),
                ResolutionMethod::ManualPick => {
                    pick_target_dir(picker, &self.config.target_executables).ok()
                }
            };

            if let Some(dir) = found {
                info!(path = %dir.display(), %method, "resolved program path");
                return Ok(ResolvedTarget { dir, method });
            }

            info!(%method, "detection method found nothing");
        }

        warn!("could not locate the target application");
        Err(LocatorError::NotFound)
    }
}
