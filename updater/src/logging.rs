//! Logging initialisation for the updater binary.
//!
//! Library code logs through the `log` facade. The binary installs a
//! `tracing-subscriber` formatter on stderr whose `tracing-log` bridge picks
//! up those records, so stdout carries only the command report.

use tracing_subscriber::filter::LevelFilter;

/// Map the `-v` count to a maximum log level.
///
/// # Examples
///
/// ```
/// use nova_updater::logging::level_for_verbosity;
/// use tracing_subscriber::filter::LevelFilter;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
/// assert_eq!(level_for_verbosity(2), LevelFilter::DEBUG);
/// assert_eq!(level_for_verbosity(9), LevelFilter::TRACE);
/// ```
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr log subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(verbosity: u8) {
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for_verbosity(verbosity))
        .with_target(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        // A subscriber is already installed; keep it.
    }
}
