//! Bridge from the `log` crate facade
//!
//! Lets applications and libraries that use `log::info!` and friends write
//! through a [`Logger`].

use super::{log_level::LogLevel, logger::Logger};
use serde_json::json;

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let extra_info = json!({ "extra": { "target": record.target() } });
        let level = LogLevel::from(record.level());

        if let Err(e) = Logger::log(self, level, record.args().to_string(), Some(&extra_info)) {
            eprintln!("[LOGGER ERROR] Failed to write log record: {}", e);
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the global `log` backend
///
/// # Errors
///
/// Fails if a global logger was already installed.
pub fn init(logger: Logger) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(log::LevelFilter::Debug);
    Ok(())
}
