use std::env;
use std::fmt::Display;
use std::time::Instant;

use chrono::Local;

pub use crate::error::LoggerError;
use crate::flags::FlagTable;
use crate::format::{concat, render_line};
pub use crate::levels::{Severity, MAX_COMPILED_SEVERITY};
use crate::progress::ProgressState;
pub use crate::streams::{Destination, Streams};
use crate::sync::{lock, AtomicU8, Mutex, Ordering};

/// Environment variable read by [`Logger::from_env`].
pub const LEVEL_ENV_VAR: &str = "CONSOLE_LOG_LEVEL";

/// Exit status used after a critical message.
const CRITICAL_EXIT_CODE: i32 = 1;

/// Everything guarded by the emission lock.
pub(crate) struct Emission {
    pub(crate) streams: Streams,
    pub(crate) last_emit: Instant,
    pub(crate) progress: ProgressState,
}

/// Leveled, timestamped, thread-safe console logger.
///
/// Every line carries the wall-clock time and the time elapsed since the
/// previous line. Lines are written whole: concurrent callers never interleave
/// characters, because formatting and writing happen under one lock.
///
/// Named timers ("flags") live behind a second lock, which is never held while
/// a line is written.
///
/// # Critical messages
///
/// [`Logger::critical`] (and `log` with [`Severity::Critical`]) flushes the
/// message and then **terminates the process** with exit status 1. It never
/// returns.
pub struct Logger {
    threshold: AtomicU8,
    ceiling: Severity,
    pub(crate) emission: Mutex<Emission>,
    pub(crate) flags: Mutex<FlagTable>,
}

/// Configures a [`Logger`] before it starts emitting.
#[derive(Debug)]
pub struct LoggerBuilder {
    threshold: Severity,
    ceiling: Severity,
    streams: Option<Streams>,
}

impl LoggerBuilder {
    /// Initial threshold, `Trace` unless set.
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Lowers the highest threshold `set_threshold` will accept.
    ///
    /// The ceiling can never exceed [`MAX_COMPILED_SEVERITY`].
    pub fn ceiling(mut self, ceiling: Severity) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Writers standing in for standard output and standard error.
    pub fn streams(mut self, streams: Streams) -> Self {
        self.streams = Some(streams);
        self
    }

    pub fn build(self) -> Logger {
        let ceiling = self.ceiling.min(MAX_COMPILED_SEVERITY);
        let threshold = self.threshold.min(ceiling);

        Logger {
            threshold: AtomicU8::new(threshold.as_u8()),
            ceiling,
            emission: Mutex::new(Emission {
                streams: self.streams.unwrap_or_default(),
                last_emit: Instant::now(),
                progress: ProgressState::default(),
            }),
            flags: Mutex::new(FlagTable::default()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            threshold: Severity::Trace,
            ceiling: MAX_COMPILED_SEVERITY,
            streams: None,
        }
    }
}

impl Logger {
    /// A logger writing to stdout/stderr, starting at `threshold`.
    pub fn new(threshold: Severity) -> Self {
        Self::builder().threshold(threshold).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Builds a logger whose threshold comes from [`LEVEL_ENV_VAR`].
    ///
    /// A missing variable means `Trace`. A value that does not parse also falls
    /// back to `Trace`, and the new logger warns about it.
    pub fn from_env() -> Self {
        Self::configured(env::var(LEVEL_ENV_VAR).ok(), Self::builder())
    }

    pub(crate) fn configured(value: Option<String>, builder: LoggerBuilder) -> Self {
        match value.as_deref().map(str::parse::<Severity>) {
            None => builder.build(),
            Some(Ok(threshold)) => builder.threshold(threshold).build(),
            Some(Err(err)) => {
                let logger = builder.threshold(Severity::Trace).build();
                logger.warning(&[&"Ignoring ", &LEVEL_ENV_VAR, &": ", &err]);
                logger
            }
        }
    }

    /// Current threshold.
    #[inline]
    pub fn threshold(&self) -> Severity {
        Severity::from_rank(self.threshold.load(Ordering::Relaxed)).unwrap_or(Severity::Off)
    }

    /// Highest threshold this logger accepts.
    #[inline]
    pub fn ceiling(&self) -> Severity {
        self.ceiling
    }

    /// Whether a message of `severity` would be written right now.
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity != Severity::Off && severity.as_u8() <= self.threshold.load(Ordering::Relaxed)
    }

    /// Changes the threshold, unless it is above the ceiling.
    ///
    /// A rejected change keeps the previous threshold and is reported as an
    /// error-level message, whatever the current threshold. Returns whether
    /// the change was applied.
    pub fn set_threshold(&self, threshold: Severity) -> bool {
        let mut state = lock(&self.emission);

        if threshold > self.ceiling {
            let body = concat(&[
                &"Invalid log level: ",
                &threshold.as_u8(),
                &". Maximum allowed is: ",
                &self.ceiling.as_u8(),
            ]);
            Self::write_locked(&mut state, Severity::Error, &body);
            return false;
        }

        self.threshold.store(threshold.as_u8(), Ordering::Relaxed);
        true
    }

    /// Logs `parts`, concatenated in order, at `severity`.
    ///
    /// Prefer the per-severity methods or the macros where the severity is
    /// fixed; they skip this dispatch.
    ///
    /// With [`Severity::Critical`] this terminates the process, unless the
    /// threshold is `Off`.
    pub fn log(&self, severity: Severity, parts: &[&dyn Display]) {
        match severity {
            Severity::Off => {}
            Severity::Critical => self.critical(parts),
            _ => {
                if self.enabled(severity) {
                    self.emit(severity, parts);
                }
            }
        }
    }

    #[cfg_attr(feature = "enforce-inlining", inline(always))]
    #[cfg_attr(not(feature = "enforce-inlining"), inline)]
    pub fn trace(&self, parts: &[&dyn Display]) {
        if self.enabled(Severity::Trace) {
            self.emit(Severity::Trace, parts);
        }
    }

    #[cfg_attr(feature = "enforce-inlining", inline(always))]
    #[cfg_attr(not(feature = "enforce-inlining"), inline)]
    pub fn debug(&self, parts: &[&dyn Display]) {
        if self.enabled(Severity::Debug) {
            self.emit(Severity::Debug, parts);
        }
    }

    #[cfg_attr(feature = "enforce-inlining", inline(always))]
    #[cfg_attr(not(feature = "enforce-inlining"), inline)]
    pub fn verbose(&self, parts: &[&dyn Display]) {
        if self.enabled(Severity::Verbose) {
            self.emit(Severity::Verbose, parts);
        }
    }

    /// Informational message, written to standard output.
    #[cfg_attr(feature = "enforce-inlining", inline(always))]
    #[cfg_attr(not(feature = "enforce-inlining"), inline)]
    pub fn info(&self, parts: &[&dyn Display]) {
        if self.enabled(Severity::Info) {
            self.emit(Severity::Info, parts);
        }
    }

    #[cfg_attr(feature = "enforce-inlining", inline(always))]
    #[cfg_attr(not(feature = "enforce-inlining"), inline)]
    pub fn warning(&self, parts: &[&dyn Display]) {
        if self.enabled(Severity::Warning) {
            self.emit(Severity::Warning, parts);
        }
    }

    #[cfg_attr(feature = "enforce-inlining", inline(always))]
    #[cfg_attr(not(feature = "enforce-inlining"), inline)]
    pub fn error(&self, parts: &[&dyn Display]) {
        if self.enabled(Severity::Error) {
            self.emit(Severity::Error, parts);
        }
    }

    /// Critical message: written to standard error, then the process exits
    /// with status 1 (see [`Logger::critical_exit`]).
    ///
    /// Like every other severity this is a no-op when the threshold is `Off`,
    /// and then it returns.
    #[cfg_attr(feature = "enforce-inlining", inline(always))]
    #[cfg_attr(not(feature = "enforce-inlining"), inline)]
    pub fn critical(&self, parts: &[&dyn Display]) {
        if self.enabled(Severity::Critical) {
            self.critical_exit(parts)
        }
    }

    /// Writes `parts` at critical severity if the threshold allows it,
    /// flushes both streams and exits the process with status 1.
    ///
    /// Unlike [`Logger::critical`] this never returns: with the threshold at
    /// `Off` the message is dropped but the process still exits.
    pub fn critical_exit(&self, parts: &[&dyn Display]) -> ! {
        {
            let mut state = lock(&self.emission);
            if self.enabled(Severity::Critical) {
                Self::write_locked(&mut state, Severity::Critical, &concat(parts));
            }
            let _ = state.streams.flush();
        }

        std::process::exit(CRITICAL_EXIT_CODE)
    }

    /// Flushes both streams.
    pub fn flush(&self) -> Result<(), LoggerError> {
        lock(&self.emission).streams.flush()?;
        Ok(())
    }

    /// Writes one line regardless of the threshold.
    #[cfg_attr(feature = "enforce-inlining", inline(always))]
    pub(crate) fn emit(&self, severity: Severity, parts: &[&dyn Display]) {
        let body = concat(parts);
        let mut state = lock(&self.emission);
        Self::write_locked(&mut state, severity, &body);
    }

    /// Stamps and writes one line. The caller holds the emission lock.
    fn write_locked(state: &mut Emission, severity: Severity, body: &str) {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(state.last_emit);
        let line = render_line(severity, &Local::now(), elapsed, body);
        state.last_emit = now;
        state.streams.emit(severity.destination(), &line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Severity::Trace)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("ceiling", &self.ceiling)
            .finish_non_exhaustive()
    }
}
