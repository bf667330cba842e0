/// Process-wide logging facade
///
/// Generation itself is stateless; the only global is the logger, kept in a
/// `OnceLock<RwLock<..>>` so a build tool can swap in its own sink before
/// running the generator.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn global_logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Logging entry points used by the `shdc_*!` macros
///
/// # Example
///
/// ```no_run
/// use shdc_codegen::shdc::{Shdc, log::{Logger, LogEntry}};
///
/// struct QuietLogger;
/// impl Logger for QuietLogger {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// Shdc::set_logger(QuietLogger);
/// ```
pub struct Shdc;

impl Shdc {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = global_logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to DefaultLogger
    pub fn reset_logger() {
        if let Ok(mut lock) = global_logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log without location (used by shdc_info!, shdc_warn!, ...)
    ///
    /// A poisoned logger lock drops the entry; logging never fails a run.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = global_logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line information (used by shdc_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = global_logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
