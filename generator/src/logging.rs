//! Diagnostic logging setup for the generator binaries.
//!
//! Library code logs through the `log` facade. The binaries install a
//! `tracing-subscriber` formatter on stderr, which also receives `log`
//! records through its `tracing-log` bridge.

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

/// The global subscriber could not be installed.
#[derive(Debug, Error)]
#[error("failed to install log subscriber: {reason}")]
pub struct LoggingError {
    /// Description of the failure.
    pub reason: String,
}

/// Level used when `--debug` is absent or present.
#[must_use]
pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Install the stderr subscriber.
///
/// # Errors
///
/// Returns [`LoggingError`] if a global subscriber or logger is already set.
pub fn init_logging(debug: bool) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| LoggingError {
            reason: e.to_string(),
        })
}
