//! Install and uninstall sequencing.

use std::path::Path;

use tracing::{error, info, warn};

use crate::FileOpsError;
use crate::install::{copy_library, install_redistributable, replace_payload};
use crate::layout::InstallLayout;
use crate::outcome::{AbortReason, Action, ItemKind, ItemResult, OperationOutcome, OutcomeStatus};
use crate::uninstall::{remove_dir_if_present, remove_file_if_present, remove_redistributable};

/// Runs the install and uninstall sequences against a resolved directory.
///
/// The target directory is trusted for the whole sequence; it is not
/// re-checked between steps.
#[derive(Debug, Clone)]
pub struct FileOperator {
    layout: InstallLayout,
}

impl FileOperator {
    pub fn new(layout: InstallLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Installs the payload, the hook library and the redistributables.
    pub fn install(&self, target: &Path) -> OperationOutcome {
        let layout = &self.layout;
        let mut outcome = OperationOutcome::new(Action::Install);
        info!(target = %target.display(), "starting install");

        let payload_dest = layout.payload_dest(target);
        if !run_primary(&mut outcome, &layout.payload_dir, || {
            replace_payload(&layout.payload_source(), &payload_dest)
        }) {
            return outcome;
        }

        let library_dest = layout.library_dest(target);
        if !run_primary(&mut outcome, &layout.library_file, || {
            copy_library(&layout.library_source(), &library_dest)
        }) {
            return outcome;
        }

        for name in &layout.redistributables {
            let source = layout.redistributable_source(name);
            outcome.push(install_redistributable(
                name,
                &source,
                &layout.system_library_dirs,
            ));
        }

        log_finished(&outcome);
        outcome
    }

    /// Removes everything [`install`](Self::install) places. Missing files are
    /// not errors, so running it twice is safe.
    pub fn uninstall(&self, target: &Path) -> OperationOutcome {
        let layout = &self.layout;
        let mut outcome = OperationOutcome::new(Action::Uninstall);
        info!(target = %target.display(), "starting uninstall");

        let payload_dest = layout.payload_dest(target);
        if !run_primary(&mut outcome, &layout.payload_dir, || {
            remove_dir_if_present(&payload_dest).map(drop)
        }) {
            return outcome;
        }

        let library_dest = layout.library_dest(target);
        if !run_primary(&mut outcome, &layout.library_file, || {
            remove_file_if_present(&library_dest).map(drop)
        }) {
            return outcome;
        }

        for name in &layout.redistributables {
            outcome.push(remove_redistributable(name, &layout.system_library_dirs));
        }

        log_finished(&outcome);
        outcome
    }
}

/// Runs a primary step and records it. Returns `false` if the sequence must stop.
fn run_primary<F>(outcome: &mut OperationOutcome, name: &str, step: F) -> bool
where
    F: FnOnce() -> Result<(), FileOpsError>,
{
    match step() {
        Ok(()) => {
            outcome.push(ItemResult::ok(name, ItemKind::Primary));
            true
        }
        Err(e) => {
            error!(action = %outcome.action, item = %name, error = %e, "primary step failed, aborting");
            outcome.push(ItemResult::failed(name, ItemKind::Primary, e.to_string()));
            outcome.abort = Some(AbortReason::PrimaryFailed { item: name.into() });
            false
        }
    }
}

fn log_finished(outcome: &OperationOutcome) {
    match outcome.status() {
        OutcomeStatus::AllOk => info!(action = %outcome.action, "completed successfully"),
        status => {
            let failed: Vec<&str> = outcome.failed_items().map(|i| i.name.as_str()).collect();
            warn!(action = %outcome.action, %status, failed = ?failed, "completed with failures");
        }
    }
}
