//! Logging configuration for the storefront
//!
//! Wires the `tracing` events emitted by the client into a subscriber with
//! a level filter, a choice of format and optional daily-rotated log files.

use std::path::{Path, PathBuf};
use storefront_core::{Error, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILE: &str = "storefront.log";

/// Log output destination
#[derive(Debug, Clone, PartialEq)]
pub enum LogOutput {
    /// Output to stdout
    Stdout,
    /// Output to a daily-rotated file
    File(PathBuf),
    /// Output to both stdout and file
    Both(PathBuf),
}

/// Log format style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable
    Pretty,
    /// Single-line
    Compact,
}

/// Logging configuration
///
/// `RUST_LOG`, when set, takes precedence over `level`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `storefront_client=debug`
    pub level: String,
    /// Output destination
    pub output: LogOutput,
    /// Format style
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: LogOutput::Stdout,
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    pub fn info() -> Self {
        Self::default()
    }

    /// Debug level; logs every request the client sends
    pub fn debug() -> Self {
        Self::default().with_level("debug")
    }

    pub fn warn() -> Self {
        Self::default().with_level("warn")
    }

    /// Set log output to file with rotation
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::File(path.into());
        self
    }

    /// Set log output to both stdout and file
    pub fn with_both<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::Both(path.into());
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    fn filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| Error::Config(format!("invalid log level '{}': {}", self.level, e)))
    }

    /// Install the global subscriber
    ///
    /// Returns the file writer's guard when logging to a file; keep it alive
    /// for as long as logs should be flushed. Fails if a global subscriber is
    /// already installed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use storefront::logging::LogConfig;
    ///
    /// let _guard = LogConfig::info().init()?;
    /// # Ok::<(), storefront::Error>(())
    /// ```
    pub fn init(self) -> Result<Option<WorkerGuard>> {
        let filter = self.filter()?;
        let registry = tracing_subscriber::registry().with(filter);

        let (result, guard) = match (&self.output, self.format) {
            (LogOutput::Stdout, LogFormat::Pretty) => {
                (registry.with(fmt::layer().pretty()).try_init(), None)
            }
            (LogOutput::Stdout, LogFormat::Compact) => {
                (registry.with(fmt::layer().compact()).try_init(), None)
            }
            (LogOutput::File(path), LogFormat::Pretty) => {
                let (writer, guard) = file_writer(path);
                let layer = fmt::layer().with_writer(writer).with_ansi(false).pretty();
                (registry.with(layer).try_init(), Some(guard))
            }
            (LogOutput::File(path), LogFormat::Compact) => {
                let (writer, guard) = file_writer(path);
                let layer = fmt::layer().with_writer(writer).with_ansi(false).compact();
                (registry.with(layer).try_init(), Some(guard))
            }
            // Both outputs share the compact format
            (LogOutput::Both(path), _) => {
                let (writer, guard) = file_writer(path);
                let result = registry
                    .with(fmt::layer().compact())
                    .with(fmt::layer().with_writer(writer).with_ansi(false).compact())
                    .try_init();
                (result, Some(guard))
            }
        };

        result.map_err(|e| Error::Config(format!("failed to install logger: {}", e)))?;
        Ok(guard)
    }
}

fn file_writer(path: &Path) -> (NonBlocking, WorkerGuard) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_LOG_FILE);
    tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name))
}
