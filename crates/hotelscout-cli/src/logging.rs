//! Subscriber setup: stderr output plus an optional plain-text log file.

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
}

impl LogLevel {
    /// Filter directive for this level. HTTP internals stay at `info` even
    /// in debug runs.
    pub(crate) fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug,hyper=info,hyper_util=info,reqwest=info",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// Picks the filter directive: a non-blank `RUST_LOG` wins over the CLI level.
pub(crate) fn filter_directive(rust_log: Option<String>, level: LogLevel) -> String {
    match rust_log {
        Some(value) if !value.trim().is_empty() => value,
        _ => level.directive().to_string(),
    }
}

/// Installs the global subscriber.
///
/// When `log_file` is set, events are also appended to that file without
/// ANSI colors. The returned guard flushes the file writer on drop and must
/// be held until the process exits.
///
/// # Errors
///
/// Returns an error if the log file's directory cannot be created or a
/// global subscriber is already installed.
pub(crate) fn init(level: LogLevel, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.directive()));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
