//! Console and file logging setup.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Initializes console logging plus an append-only log file at `log_path`.
///
/// If the file cannot be opened, logging continues on the console only.
/// The returned guard flushes the file writer when dropped and must be kept
/// alive until exit.
pub fn init(log_path: &Path) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .compact();

    let (file_layer, guard) = match file_appender(log_path) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_target(false);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("failed to open log file {}: {e}", log_path.display());
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// Opens `log_path` for appending, creating its parent directory if needed.
fn file_appender(log_path: &Path) -> anyhow::Result<RollingFileAppender> {
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log path has no file name"))?;
    let dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;
    Ok(appender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appender_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs").join("ets_tool_log.txt");

        let appender = file_appender(&path);
        assert!(appender.is_ok());
        assert!(tmp.path().join("logs").is_dir());
    }

    #[test]
    fn appender_rejects_path_without_file_name() {
        assert!(file_appender(Path::new("/")).is_err());
    }
}
