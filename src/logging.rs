//! Logger setup.
//!
//! Logs go to `~/Library/Logs/desktop-control`, rotated daily, and are
//! duplicated to stdout in debug builds.

use std::backtrace::Backtrace;
use std::panic;
use std::path::PathBuf;

use flexi_logger::{
    Age, Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, LogSpecification, Logger,
    LoggerHandle, Naming,
};
use log::error;

/// Directory receiving the log files.
pub fn log_directory() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("Library/Logs/desktop-control"))
        .unwrap_or_else(std::env::temp_dir)
}

/// Parse a log specification, falling back to `info` when it is malformed.
pub fn log_spec(spec: &str) -> LogSpecification {
    LogSpecification::parse(spec).unwrap_or_else(|err| {
        eprintln!("Invalid log specification {:?}: {}", spec, err);
        LogSpecification::info()
    })
}

/// Start the global logger and install a panic hook that logs backtraces.
///
/// The returned handle must stay alive for the lifetime of the process.
pub fn init(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::with(log_spec(spec))
        .log_to_file(FileSpec::default().directory(log_directory()))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        );
    let logger = if cfg!(debug_assertions) {
        logger.duplicate_to_stdout(Duplicate::All)
    } else {
        logger
    };
    let handle = logger.start()?;

    panic::set_hook(Box::new(|info| {
        let b = Backtrace::capture();
        error!("Panic: {info} \n {b}");
    }));

    Ok(handle)
}
