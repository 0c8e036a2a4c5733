//! Running-process inspection.

use std::path::{Path, PathBuf};

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::{debug, info, warn};

use crate::LocatorError;

/// A running process as seen at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCandidate {
    pub pid: u32,
    /// Executable image name, e.g. `Ets.exe`.
    pub name: String,
    /// Full executable path, `None` when the OS refused to report it.
    pub exe: Option<PathBuf>,
}

/// Source of the live process list.
///
/// Implementations must query the OS on every call; the list is never cached.
pub trait ProcessSource {
    fn processes(&self) -> Result<Vec<ProcessCandidate>, LocatorError>;
}

/// Process list read from the OS through `sysinfo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcesses;

impl ProcessSource for SystemProcesses {
    fn processes(&self) -> Result<Vec<ProcessCandidate>, LocatorError> {
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_exe(UpdateKind::Always),
        );

        let mut candidates: Vec<ProcessCandidate> = system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessCandidate {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().into_owned(),
                exe: process.exe().map(Path::to_path_buf),
            })
            .collect();

        // HashMap order is arbitrary; keep the scan deterministic.
        candidates.sort_by_key(|c| c.pid);
        Ok(candidates)
    }
}

/// Returns the directory of the first running target executable.
///
/// Processes whose executable path cannot be read are logged and skipped.
pub fn scan_processes(source: &dyn ProcessSource, targets: &[String]) -> Option<PathBuf> {
    let candidates = match source.processes() {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!(error = %e, "failed to enumerate running processes");
            return None;
        }
    };
    debug!(count = candidates.len(), "enumerated running processes");

    for candidate in candidates
        .iter()
        .filter(|c| targets.iter().any(|t| *t == c.name))
    {
        match candidate.exe.as_deref().and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => {
                info!(
                    pid = candidate.pid,
                    exe = %candidate.exe.as_deref().unwrap_or(dir).display(),
                    "found running target process"
                );
                return Some(dir.to_path_buf());
            }
            _ => {
                warn!(
                    pid = candidate.pid,
                    name = %candidate.name,
                    "cannot read executable path of target process"
                );
            }
        }
    }

    None
}
