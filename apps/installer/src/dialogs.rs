//! Native dialogs: action menu, executable picker, result messages.

use std::path::{Path, PathBuf};

use etstool_file_ops::{OperationOutcome, OutcomeStatus};
use etstool_locator::ExecutablePicker;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

pub const APP_TITLE: &str = "ETS Toolbox Installer";

const INSTALL_LABEL: &str = "Install";
const UNINSTALL_LABEL: &str = "Uninstall";
const EXIT_LABEL: &str = "Exit";

/// Action chosen from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Install,
    Uninstall,
}

/// Shows the main menu. Returns `None` when the user exits.
pub fn choose_action() -> Option<MenuChoice> {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(APP_TITLE)
        .set_description("Install or uninstall the ETS toolbox.")
        .set_buttons(MessageButtons::YesNoCancelCustom(
            INSTALL_LABEL.into(),
            UNINSTALL_LABEL.into(),
            EXIT_LABEL.into(),
        ))
        .show();
    menu_choice(result)
}

/// Maps a menu dialog result to an action. Some backends report custom
/// buttons as yes/no.
fn menu_choice(result: MessageDialogResult) -> Option<MenuChoice> {
    match result {
        MessageDialogResult::Custom(label) if label == INSTALL_LABEL => Some(MenuChoice::Install),
        MessageDialogResult::Custom(label) if label == UNINSTALL_LABEL => {
            Some(MenuChoice::Uninstall)
        }
        MessageDialogResult::Yes => Some(MenuChoice::Install),
        MessageDialogResult::No => Some(MenuChoice::Uninstall),
        _ => None,
    }
}

/// Shows the result of an install or uninstall.
pub fn show_outcome(outcome: &OperationOutcome) {
    let status = outcome.status();
    let _ = MessageDialog::new()
        .set_level(level_for(status))
        .set_title(title_for(status))
        .set_description(outcome.summary())
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Shows a fatal startup error.
pub fn show_error(message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title_for(OutcomeStatus::Failed))
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn title_for(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::AllOk => "Success",
        OutcomeStatus::Partial => "Warning",
        OutcomeStatus::Failed => "Error",
    }
}

fn level_for(status: OutcomeStatus) -> MessageLevel {
    match status {
        OutcomeStatus::AllOk => MessageLevel::Info,
        OutcomeStatus::Partial => MessageLevel::Warning,
        OutcomeStatus::Failed => MessageLevel::Error,
    }
}

/// [`ExecutablePicker`] backed by the native file dialog.
pub struct DialogPicker {
    targets: Vec<String>,
}

impl DialogPicker {
    pub fn new(targets: Vec<String>) -> Self {
        Self { targets }
    }
}

impl ExecutablePicker for DialogPicker {
    fn pick_executable(&mut self, filter_description: &str) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(format!("Select {}", self.targets.join(" or ")))
            .add_filter(filter_description, &["exe"])
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn reject_selection(&mut self, path: &Path, expected: &[String]) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Warning")
            .set_description(format!(
                "{name} is not a valid program file. Please select {}.",
                expected.join(" or ")
            ))
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
