//! Logging bootstrap for the binary.
//!
//! The library only talks to the `log` facade. The terminal client installs a
//! stderr logger here so diagnostics never mix with command output on stdout.

use crate::error::{Result, TodoError};
use flexi_logger::{Logger, LoggerHandle};

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    }
}

/// Starts the stderr logger. Keep the returned handle alive for the whole run.
pub fn init_logging(verbose: bool) -> Result<LoggerHandle> {
    let level = level_for(verbose);
    Logger::try_with_str(level)
        .map_err(|e| TodoError::Logging(format!("invalid log level `{}`: {}", level, e)))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| TodoError::Logging(format!("failed to start logger: {}", e)))
}
