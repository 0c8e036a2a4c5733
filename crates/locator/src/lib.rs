//! Detection of the target application's installation directory.
//!
//! The [`Locator`] tries three methods in order and stops at the first hit:
//!
//! 1. **Process scan**: a running `Ets.exe` / `shell.exe` reveals its directory.
//! 2. **Folder search**: well-known parent directories are scanned for a
//!    subdirectory whose name contains the target keyword.
//! 3. **Manual pick**: the user selects the executable through an
//!    [`ExecutablePicker`] supplied by the presentation layer.

pub mod config;
pub mod locator;
pub mod picker;
pub mod process;
pub mod search;

// Re-export primary types.
pub use config::{LocatorConfig, SearchRoot};
pub use locator::{Locator, ResolutionMethod, ResolvedTarget};
pub use picker::{EXECUTABLE_FILTER, ExecutablePicker, is_target_executable};
pub use process::{ProcessCandidate, ProcessSource, SystemProcesses};

/// Errors for target detection.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("target application installation not found")]
    NotFound,

    #[error("selection cancelled by user")]
    Cancelled,

    /// Returned by [`ProcessSource`] implementations that cannot enumerate
    /// processes. The scan logs it and falls through to the folder search.
    #[error("process inspection failed: {0}")]
    Process(String),
}
