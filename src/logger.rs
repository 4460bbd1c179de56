//! Pluggable logging for the client.
//!
//! The client only needs a handful of severities, so anything that can
//! implement [`Logger::log`] can be injected with
//! [`Client::with_logger`](crate::Client::with_logger). When nothing is
//! injected a [`FileLogger`] is created the first time the client logs.

use std::path::{Path, PathBuf};
use tracing::Dispatch;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub use tracing::Level;

/// File name used by the default logger when none is configured.
pub const DEFAULT_LOG_FILE: &str = "yousign-client.log";

const TARGET: &str = "yousign";

/// Logging capability used by the client.
///
/// Implementations must not panic; a logging failure never fails a request.
pub trait Logger: Send + Sync {
    /// Record `message` at `level`.
    fn log(&self, level: Level, message: &str);

    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    fn trace(&self, message: &str) {
        self.log(Level::TRACE, message);
    }
}

/// Forwards to whatever global `tracing` subscriber the application installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        emit(level, message);
    }
}

/// Writes JSON lines to a local file through a private `tracing` dispatcher.
///
/// Falls back to stderr when the file cannot be opened.
pub struct FileLogger {
    dispatch: Dispatch,
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name.as_str())
            .build(dir);

        let dispatch = match appender {
            Ok(writer) => Dispatch::new(
                tracing_subscriber::fmt()
                    .json()
                    .with_max_level(Level::TRACE)
                    .with_writer(writer)
                    .finish(),
            ),
            Err(_) => Dispatch::new(
                tracing_subscriber::fmt()
                    .json()
                    .with_max_level(Level::TRACE)
                    .with_writer(std::io::stderr)
                    .finish(),
            ),
        };

        Self {
            dispatch,
            path: dir.join(file_name),
        }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl Logger for FileLogger {
    fn log(&self, level: Level, message: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || emit(level, message));
    }
}

fn emit(level: Level, message: &str) {
    if level == Level::ERROR {
        tracing::error!(target: TARGET, "{}", message);
    } else if level == Level::WARN {
        tracing::warn!(target: TARGET, "{}", message);
    } else if level == Level::INFO {
        tracing::info!(target: TARGET, "{}", message);
    } else if level == Level::DEBUG {
        tracing::debug!(target: TARGET, "{}", message);
    } else {
        tracing::trace!(target: TARGET, "{}", message);
    }
}
