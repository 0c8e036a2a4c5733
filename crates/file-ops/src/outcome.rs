//! Per-item results and their aggregate.

use std::fmt;

/// User-facing message when the target application cannot be located.
pub const NOT_FOUND_MESSAGE: &str = "Could not detect the ETS installation location. \
     Please make sure ETS is installed correctly, then try again.";

/// The operation an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Uninstall,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Install => write!(f, "install"),
            Action::Uninstall => write!(f, "uninstall"),
        }
    }
}

/// Whether an item failure aborts the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Failure aborts and yields [`OutcomeStatus::Failed`].
    Primary,
    /// Failure is recorded and yields [`OutcomeStatus::Partial`].
    Auxiliary,
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    pub name: String,
    pub kind: ItemKind,
    pub succeeded: bool,
    /// Error detail for failed items.
    pub detail: Option<String>,
}

impl ItemResult {
    pub fn ok(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            succeeded: true,
            detail: None,
        }
    }

    pub fn failed(name: impl Into<String>, kind: ItemKind, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            succeeded: false,
            detail: Some(detail.into()),
        }
    }
}

/// Why a sequence stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The locator found nothing; no file was touched.
    TargetNotFound,
    /// A primary item failed.
    PrimaryFailed { item: String },
}

/// Overall status of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    AllOk,
    Partial,
    Failed,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::AllOk => write!(f, "ok"),
            OutcomeStatus::Partial => write!(f, "partial"),
            OutcomeStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Aggregate of every step an install or uninstall ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    pub action: Action,
    pub items: Vec<ItemResult>,
    pub abort: Option<AbortReason>,
}

impl OperationOutcome {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            items: Vec::new(),
            abort: None,
        }
    }

    /// Outcome of an operation whose target could not be located.
    pub fn target_not_found(action: Action) -> Self {
        Self {
            action,
            items: Vec::new(),
            abort: Some(AbortReason::TargetNotFound),
        }
    }

    pub fn push(&mut self, item: ItemResult) {
        self.items.push(item);
    }

    pub fn status(&self) -> OutcomeStatus {
        let primary_failed = self
            .items
            .iter()
            .any(|i| i.kind == ItemKind::Primary && !i.succeeded);

        if self.abort.is_some() || primary_failed {
            OutcomeStatus::Failed
        } else if self.items.iter().any(|i| !i.succeeded) {
            OutcomeStatus::Partial
        } else {
            OutcomeStatus::AllOk
        }
    }

    /// Items that did not succeed, in execution order.
    pub fn failed_items(&self) -> impl Iterator<Item = &ItemResult> {
        self.items.iter().filter(|i| !i.succeeded)
    }

    /// Short message for the user. Full error details go to the log.
    pub fn summary(&self) -> String {
        let verb = match self.action {
            Action::Install => "Install",
            Action::Uninstall => "Uninstall",
        };

        match (&self.abort, self.status()) {
            (Some(AbortReason::TargetNotFound), _) => NOT_FOUND_MESSAGE.to_string(),
            (Some(AbortReason::PrimaryFailed { item }), _) => {
                format!("{verb} failed while processing {item}. See the log for details.")
            }
            (None, OutcomeStatus::Failed) => {
                format!("{verb} failed. See the log for details.")
            }
            (None, OutcomeStatus::Partial) => {
                let what = match self.action {
                    Action::Install => "copied",
                    Action::Uninstall => "removed",
                };
                let names: Vec<&str> = self.failed_items().map(|i| i.name.as_str()).collect();
                format!(
                    "{verb} completed, but some library files could not be {what}: {}",
                    names.join(", ")
                )
            }
            (None, OutcomeStatus::AllOk) => format!("{verb} completed!"),
        }
    }
}
