//! Bridge from the [`log`] crate's macros to a [`Logger`].

use log::{Level, LevelFilter, Metadata, Record};

use crate::levels::Severity;
use crate::prelude::Logger;

#[cfg(all(feature = "singleton", not(all(test, feature = "loom"))))]
use crate::error::LoggerError;

pub(crate) const fn severity_of(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info => Severity::Info,
        Level::Debug => Severity::Debug,
        Level::Trace => Severity::Trace,
    }
}

/// Most verbose `log` filter that can still reach a logger capped at `ceiling`.
pub(crate) const fn level_filter(ceiling: Severity) -> LevelFilter {
    match ceiling {
        Severity::Off | Severity::Critical => LevelFilter::Off,
        Severity::Error => LevelFilter::Error,
        Severity::Warning => LevelFilter::Warn,
        Severity::Info | Severity::Verbose => LevelFilter::Info,
        Severity::Debug => LevelFilter::Debug,
        Severity::Trace => LevelFilter::Trace,
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Logger::enabled(self, severity_of(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let severity = severity_of(record.level());
        if Logger::enabled(self, severity) {
            Logger::log(self, severity, &[&record.target(), &": ", record.args()]);
        }
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

/// Routes the `log` crate's macros to the global [`logger()`](crate::logger).
///
/// Fails if another `log` implementation is already installed.
#[cfg(all(feature = "singleton", not(all(test, feature = "loom"))))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "log", feature = "singleton"))))]
pub fn install_global_facade() -> Result<(), LoggerError> {
    let logger = crate::sync::logger();
    log::set_logger(logger).map_err(|_| LoggerError::FacadeAlreadySet)?;
    log::set_max_level(level_filter(logger.ceiling()));
    Ok(())
}
