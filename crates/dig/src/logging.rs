//! File logging
//!
//! The terminal is owned by the UI, so logs go to `<cache dir>/dig/dig.log`.
//! Verbosity comes from `DIG_LOG` (EnvFilter syntax), defaulting to `warn`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DIG_LOG";
const LOG_FILE: &str = "dig.log";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. The returned guard flushes on drop and must
/// live until exit; `None` means logging is disabled.
pub fn init() -> Option<WorkerGuard> {
    let dir = dirs::cache_dir()?.join("dig");
    std::fs::create_dir_all(&dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
