// Copyright 2025 Anapaya Systems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Logging setup for the IPv6 SDK tools.

use std::{io::IsTerminal, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::time::UtcTime,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Environment variable to define the log level.
pub const LOG_LEVEL_ENV: &str = "RUST_LOG";

/// Log level used when [`LOG_LEVEL_ENV`] is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised when installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum ObservabilityError {
    /// A global subscriber was already installed.
    #[error("failed to install global tracing subscriber: {0}")]
    AlreadyInitialized(#[from] TryInitError),
    /// The executable name could not be determined for the log file name.
    #[error("cannot determine the executable name for the log file")]
    UnknownExecutable,
}

/// Returns the filter configured through [`LOG_LEVEL_ENV`], falling back to
/// [`DEFAULT_LOG_LEVEL`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Setup logging using the tracing library.
///
/// # Arguments
///
/// * `log_dir`: If provided, logs are written to a file that carries the name of the current
///   executable in this directory. The file receives everything at debug level and above.
/// * `log_to_stderr`: If true, logs filtered by [`env_filter`] are written to stderr.
///
/// The returned guards flush buffered log lines when dropped and must be kept alive for as long
/// as logging is needed.
pub fn setup_tracing<P: AsRef<Path>>(
    log_dir: Option<P>,
    log_to_stderr: bool,
) -> Result<Vec<WorkerGuard>, ObservabilityError> {
    let mut guards = vec![];
    let mut layers = vec![];

    if let Some(log_dir) = log_dir {
        let log_file = tracing_appender::rolling::never(
            log_dir.as_ref(),
            format!("{}.log", exec_name().ok_or(ObservabilityError::UnknownExecutable)?),
        );
        let (non_blocking_writer, file_guard) = tracing_appender::non_blocking(log_file);
        let file_logger = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(non_blocking_writer)
            .with_filter(tracing::level_filters::LevelFilter::DEBUG);
        layers.push(file_logger.boxed());
        guards.push(file_guard);
    }

    if log_to_stderr {
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
        let stderr_logger = tracing_subscriber::fmt::layer()
            // Enable colors if the stderr is a terminal.
            .with_ansi(std::io::stderr().is_terminal())
            .with_timer(UtcTime::rfc_3339())
            .with_writer(non_blocking_writer)
            .with_filter(env_filter());
        layers.push(stderr_logger.boxed());
        guards.push(guard);
    }

    Registry::default().with(layers).try_init()?;

    tracing::debug!("Logging initialized!");
    Ok(guards)
}

/// Extract the name of the executable that is currently running.
fn exec_name() -> Option<String> {
    let exec_path = std::env::current_exe().ok()?;
    exec_path
        .file_stem()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}
