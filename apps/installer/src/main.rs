//! ETS toolbox installer entry point.

mod app;
mod config;
mod dialogs;
mod elevation;
mod logging;

use std::time::Duration;

use etstool_file_ops::FileOperator;
use etstool_locator::Locator;

use crate::app::Installer;
use crate::config::Config;
use crate::dialogs::{DialogPicker, MenuChoice};
use crate::elevation::Elevation;

/// How long a startup error stays on screen before the process exits.
const FATAL_EXIT_DELAY: Duration = Duration::from_secs(10);

fn main() {
    let loaded = Config::load();
    let log_path = match &loaded {
        Ok(config) => config.log_path.clone(),
        Err(_) => config::default_log_path(),
    };
    let guard = logging::init(&log_path);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        "starting ETS toolbox installer"
    );

    if let Err(e) = loaded.and_then(run) {
        tracing::error!(error = format!("{e:#}"), "installer failed to start");
        drop(guard);
        eprintln!("Error: {e:#}");
        dialogs::show_error(&format!("{e:#}"));
        std::thread::sleep(FATAL_EXIT_DELAY);
        std::process::exit(1);
    }

    tracing::info!("installer exited");
}

fn run(config: Config) -> anyhow::Result<()> {
    match elevation::ensure_elevated() {
        Ok(Elevation::Relaunched) => {
            tracing::info!("relaunched with administrator privileges, exiting");
            return Ok(());
        }
        Ok(state) => tracing::debug!(?state, "elevation check done"),
        Err(e) => tracing::warn!(error = %e, "could not elevate, continuing without administrator privileges"),
    }

    let picker = DialogPicker::new(config.locator.target_executables.clone());
    let mut installer = Installer::new(
        Locator::new(config.locator),
        FileOperator::new(config.files),
        picker,
    );

    while let Some(choice) = dialogs::choose_action() {
        let outcome = match choice {
            MenuChoice::Install => installer.request_install(),
            MenuChoice::Uninstall => installer.request_uninstall(),
        };
        tracing::info!(action = %outcome.action, status = %outcome.status(), "request finished");
        dialogs::show_outcome(&outcome);
    }

    Ok(())
}
