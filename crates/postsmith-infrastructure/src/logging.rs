//! Diagnostic logging setup.
//!
//! Logs go to a daily rolling file, not to the terminal. This is the
//! operator's channel: generator errors are recorded here in full while users
//! only see a generic message.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "POSTSMITH_LOG";

const LOG_FILE_PREFIX: &str = "postsmith.log";

/// Installs the global subscriber writing to `<log_dir>/postsmith.log.YYYY-MM-DD`.
///
/// The returned guard flushes buffered lines on drop; hold it for the
/// lifetime of the program. Calling this twice is harmless; the second
/// subscriber is simply not installed.
///
/// Returns `None` when the log directory cannot be created. The program keeps
/// running without a log file.
pub fn init_logging(log_dir: &Path) -> Option<WorkerGuard> {
    let file_appender = match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!(
                "Warning: logging disabled, cannot open {}: {e}",
                log_dir.display()
            );
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }

    Some(guard)
}
