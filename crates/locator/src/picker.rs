//! Manual selection of the target executable.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::LocatorError;

/// Filter description shown by the file selection prompt.
pub const EXECUTABLE_FILTER: &str = "Executable files (*.exe)";

/// Interactive file selection, implemented by the presentation layer.
///
/// Calls block until the user answers.
pub trait ExecutablePicker {
    /// Prompts for an executable file. Returns `None` if the user cancels.
    fn pick_executable(&mut self, filter_description: &str) -> Option<PathBuf>;

    /// Tells the user that `path` is not one of the `expected` executables.
    fn reject_selection(&mut self, path: &Path, expected: &[String]);
}

/// Returns `true` if the file name of `path` contains one of `targets`.
///
/// The check is case-sensitive.
pub fn is_target_executable(path: &Path, targets: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    targets.iter().any(|t| name.contains(t.as_str()))
}

/// Prompts until the user picks a target executable or cancels.
pub(crate) fn pick_target_dir(
    picker: &mut dyn ExecutablePicker,
    targets: &[String],
) -> Result<PathBuf, LocatorError> {
    loop {
        let Some(path) = picker.pick_executable(EXECUTABLE_FILTER) else {
            info!("user cancelled program path selection");
            return Err(LocatorError::Cancelled);
        };

        if is_target_executable(&path, targets)
            && let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            info!(path = %dir.display(), "user selected program path");
            return Ok(dir.to_path_buf());
        }

        warn!(path = %path.display(), "user selected an invalid program file");
        picker.reject_selection(&path, targets);
    }
}
