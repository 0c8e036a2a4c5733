//! Install steps: payload replacement, hook library, redistributables.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::FileOpsError;
use crate::copy::copy_dir_recursive;
use crate::outcome::{ItemKind, ItemResult};

/// Replaces `dest` with a fresh copy of the `source` directory.
///
/// An existing `dest` is removed first so stale files do not survive an upgrade.
pub fn replace_payload(source: &Path, dest: &Path) -> Result<(), FileOpsError> {
    if !source.is_dir() {
        return Err(FileOpsError::MissingSource(source.to_path_buf()));
    }

    if dest.exists() {
        std::fs::remove_dir_all(dest).map_err(|e| FileOpsError::io("remove", dest, e))?;
        info!(path = %dest.display(), "removed previous payload directory");
    }

    let files = copy_dir_recursive(source, dest)?;
    info!(path = %dest.display(), files, "copied payload directory");
    Ok(())
}

/// Copies a single file over `dest`, overwriting any existing file.
pub fn copy_library(source: &Path, dest: &Path) -> Result<(), FileOpsError> {
    if !source.is_file() {
        return Err(FileOpsError::MissingSource(source.to_path_buf()));
    }

    std::fs::copy(source, dest).map_err(|e| FileOpsError::io("copy", dest, e))?;
    info!(path = %dest.display(), "copied library");
    Ok(())
}

/// Copies one redistributable into every existing system library directory.
///
/// Never aborts: a missing source or a failed copy is returned as a failed
/// auxiliary item. Directories that do not exist are skipped.
pub fn install_redistributable(name: &str, source: &Path, system_dirs: &[PathBuf]) -> ItemResult {
    if !source.is_file() {
        warn!(file = %name, source = %source.display(), "redistributable missing from resources");
        return ItemResult::failed(name, ItemKind::Auxiliary, "missing from resources");
    }

    let mut errors = Vec::new();
    for dir in system_dirs {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "system library directory not present, skipping");
            continue;
        }

        let dest = dir.join(name);
        match std::fs::copy(source, &dest) {
            Ok(_) => info!(path = %dest.display(), "copied redistributable"),
            Err(e) => {
                let err = FileOpsError::io("copy", &dest, e);
                error!(file = %name, error = %err, "failed to copy redistributable");
                errors.push(err.to_string());
            }
        }
    }

    if errors.is_empty() {
        ItemResult::ok(name, ItemKind::Auxiliary)
    } else {
        ItemResult::failed(name, ItemKind::Auxiliary, errors.join("; "))
    }
}
