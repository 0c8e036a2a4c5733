//! Install and uninstall requests: detection followed by file operations.

use etstool_file_ops::{Action, FileOperator, OperationOutcome};
use etstool_locator::{ExecutablePicker, Locator, ProcessSource, SystemProcesses};
use tracing::{error, info};

/// Wires detection to the file operations for one install or uninstall
/// request. Detection runs again on every request.
pub struct Installer<P, S = SystemProcesses> {
    locator: Locator<S>,
    operator: FileOperator,
    picker: P,
}

impl<P: ExecutablePicker, S: ProcessSource> Installer<P, S> {
    pub fn new(locator: Locator<S>, operator: FileOperator, picker: P) -> Self {
        Self {
            locator,
            operator,
            picker,
        }
    }

    pub fn request_install(&mut self) -> OperationOutcome {
        self.run(Action::Install)
    }

    pub fn request_uninstall(&mut self) -> OperationOutcome {
        self.run(Action::Uninstall)
    }

    fn run(&mut self, action: Action) -> OperationOutcome {
        info!(%action, "request received");

        let target = match self.locator.resolve(&mut self.picker) {
            Ok(target) => target,
            Err(e) => {
                error!(%action, error = %e, "no target directory, nothing changed");
                return OperationOutcome::target_not_found(action);
            }
        };

        info!(%action, path = %target.dir.display(), method = %target.method, "target resolved");
        match action {
            Action::Install => self.operator.install(&target.dir),
            Action::Uninstall => self.operator.uninstall(&target.dir),
        }
    }
}
