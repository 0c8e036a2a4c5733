//! File operations for installing and removing the ETS toolbox.
//!
//! A [`FileOperator`] runs a fixed list of steps against a resolved target
//! directory. Primary steps (payload directory, hook library) abort the
//! sequence on failure; auxiliary steps (runtime redistributables) are
//! recorded individually and only degrade the outcome to partial.

mod copy;
mod install;
mod layout;
mod operator;
mod outcome;
mod uninstall;

pub use copy::copy_dir_recursive;
pub use install::{copy_library, install_redistributable, replace_payload};
pub use layout::{InstallLayout, RESOURCE_DIR_NAME, default_resource_dir};
pub use operator::FileOperator;
pub use outcome::{
    AbortReason, Action, ItemKind, ItemResult, NOT_FOUND_MESSAGE, OperationOutcome,
    OutcomeStatus,
};
pub use uninstall::{remove_dir_if_present, remove_file_if_present, remove_redistributable};

use std::path::PathBuf;

/// Errors raised by individual file operations.
#[derive(Debug, thiserror::Error)]
pub enum FileOpsError {
    #[error("source not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileOpsError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
