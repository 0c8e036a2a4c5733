//! Uninstall steps. Absence of a file is success, so uninstall is idempotent.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::FileOpsError;
use crate::outcome::{ItemKind, ItemResult};

/// Recursively removes `path` if it exists. Returns whether anything was removed.
pub fn remove_dir_if_present(path: &Path) -> Result<bool, FileOpsError> {
    if !path.exists() {
        debug!(path = %path.display(), "directory not present");
        return Ok(false);
    }

    std::fs::remove_dir_all(path).map_err(|e| FileOpsError::io("remove", path, e))?;
    info!(path = %path.display(), "removed directory");
    Ok(true)
}

/// Removes the file at `path` if it exists. Returns whether anything was removed.
pub fn remove_file_if_present(path: &Path) -> Result<bool, FileOpsError> {
    if !path.exists() {
        debug!(path = %path.display(), "file not present");
        return Ok(false);
    }

    std::fs::remove_file(path).map_err(|e| FileOpsError::io("remove", path, e))?;
    info!(path = %path.display(), "removed file");
    Ok(true)
}

/// Removes one redistributable from every system library directory holding it.
///
/// Errors are recorded on the returned item; every directory is still visited.
pub fn remove_redistributable(name: &str, system_dirs: &[PathBuf]) -> ItemResult {
    let mut errors = Vec::new();

    for dir in system_dirs {
        if let Err(e) = remove_file_if_present(&dir.join(name)) {
            error!(file = %name, error = %e, "failed to remove redistributable");
            errors.push(e.to_string());
        }
    }

    if errors.is_empty() {
        ItemResult::ok(name, ItemKind::Auxiliary)
    } else {
        ItemResult::failed(name, ItemKind::Auxiliary, errors.join("; "))
    }
}
